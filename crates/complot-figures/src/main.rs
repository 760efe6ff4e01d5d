//! complot-figures - Gallery Generator
//!
//! Renders the complot reference figures: one PNG per entry in the gallery
//! table, written to an output directory.

use anyhow::{Context, Result};
use clap::Parser;
use complot::prelude::*;
use ndarray::Array2;
use std::f64::consts::PI;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// complot gallery generator - domain-coloring figures of complex functions
#[derive(Parser, Debug)]
#[command(name = "complot-figures")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for rendered figures
    #[arg(short, long, default_value = "plots")]
    out_dir: PathBuf,

    /// Samples across the horizontal axis (rows follow the aspect ratio)
    #[arg(short, long, default_value_t = 400)]
    resolution: usize,

    /// Render only figures whose name contains this substring
    #[arg(short, long)]
    filter: Option<String>,

    /// List figure names without rendering anything
    #[arg(long)]
    list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// An array-level plottable function.
type GridFn = Box<dyn Fn(&Array2<Complex64>) -> Array2<Complex64> + Sync>;

/// One gallery entry: output name (without extension), window, and function.
struct Figure {
    name: &'static str,
    x: (f64, f64),
    y: (f64, f64),
    abs_scaling: f64,
    mode: ColorMode,
    function: GridFn,
}

impl Figure {
    /// Entry for a scalar function, lifted element-wise over the grid.
    fn scalar(
        name: &'static str,
        x: (f64, f64),
        y: (f64, f64),
        f: impl Fn(Complex64) -> Complex64 + Sync + 'static,
    ) -> Self {
        Self {
            name,
            x,
            y,
            abs_scaling: 1.0,
            mode: ColorMode::Full,
            function: Box::new(pointwise(f)),
        }
    }

    /// Entry for a function that consumes the whole grid at once.
    fn grid(
        name: &'static str,
        x: (f64, f64),
        y: (f64, f64),
        f: impl Fn(&Array2<Complex64>) -> Array2<Complex64> + Sync + 'static,
    ) -> Self {
        Self {
            name,
            x,
            y,
            abs_scaling: 1.0,
            mode: ColorMode::Full,
            function: Box::new(f),
        }
    }

    fn with_scaling(mut self, scaling: f64) -> Self {
        self.abs_scaling = scaling;
        self
    }

    fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }
}

/// The full figure table.
#[allow(clippy::too_many_lines)]
fn gallery() -> Vec<Figure> {
    let i = Complex64::new(0.0, 1.0);
    vec![
        // First function from the SIAM 100-digit challenge; huge dynamic
        // range, hence the strong magnitude compression.
        Figure::scalar("siam", (-1.0, 1.0), (-1.0, 1.0), |z| {
            (z.ln() / z).cos() / z
        })
        .with_scaling(10.0),
        Figure::scalar("sinz3z", (-2.0, 2.0), (-2.0, 2.0), |z| (z * z * z).sin() / z),
        Figure::scalar("sinz3z-abs", (-2.0, 2.0), (-2.0, 2.0), |z| {
            (z * z * z).sin() / z
        })
        .with_mode(ColorMode::AbsOnly),
        Figure::scalar("sinz3z-arg", (-2.0, 2.0), (-2.0, 2.0), |z| {
            (z * z * z).sin() / z
        })
        .with_mode(ColorMode::ArgOnly),
        //
        Figure::scalar("z1", (-2.0, 2.0), (-2.0, 2.0), |z| z),
        Figure::scalar("z2", (-2.0, 2.0), (-2.0, 2.0), |z| z * z),
        Figure::scalar("z3", (-2.0, 2.0), (-2.0, 2.0), |z| z * z * z),
        //
        Figure::scalar("1z", (-2.0, 2.0), (-2.0, 2.0), |z| z.inv()),
        Figure::scalar("1z2", (-2.0, 2.0), (-2.0, 2.0), |z| (z * z).inv()),
        Figure::scalar("1z3", (-2.0, 2.0), (-2.0, 2.0), |z| (z * z * z).inv()),
        // Moebius transforms
        Figure::scalar("moebius1", (-5.0, 5.0), (-5.0, 5.0), |z| {
            (z + 1.0) / (z - 1.0)
        }),
        Figure::scalar("moebius2", (-5.0, 5.0), (-5.0, 5.0), |z| {
            (z + Complex64::new(1.5, -0.5)) * Complex64::new(1.5, -0.5)
                / (z - Complex64::new(1.5, -0.5))
                * Complex64::new(-1.5, 0.5)
        }),
        Figure::scalar("moebius3", (-5.0, 5.0), (-5.0, 5.0), move |z| {
            (-i * z) / (i * z + Complex64::new(1.5, -0.5))
        }),
        // Roots of unity
        Figure::scalar("z6+1", (-1.5, 1.5), (-1.5, 1.5), |z| z.powu(6) + 1.0),
        Figure::scalar("z6-1", (-1.5, 1.5), (-1.5, 1.5), |z| z.powu(6) - 1.0),
        Figure::scalar("z-6+1", (-1.5, 1.5), (-1.5, 1.5), |z| z.powi(-6) + 1.0),
        //
        Figure::scalar("zz", (-3.0, 3.0), (-3.0, 3.0), |z| z.powc(z)),
        Figure::scalar("1zz", (-3.0, 3.0), (-3.0, 3.0), |z| z.inv().powc(z)),
        Figure::scalar("z1z", (-3.0, 3.0), (-3.0, 3.0), |z| z.powc(z.inv())),
        //
        Figure::scalar("root2", (-2.0, 2.0), (-2.0, 2.0), |z| z.sqrt()),
        Figure::scalar("root3", (-2.0, 2.0), (-2.0, 2.0), |z| z.cbrt()),
        Figure::scalar("root4", (-2.0, 2.0), (-2.0, 2.0), |z| z.powf(0.25)),
        //
        Figure::scalar("log", (-2.0, 2.0), (-2.0, 2.0), |z| z.ln()),
        Figure::scalar("exp", (-3.0, 3.0), (-3.0, 3.0), |z| z.exp()),
        Figure::scalar("exp2", (-3.0, 3.0), (-3.0, 3.0), |z| {
            Complex64::from(2.0).powc(z)
        }),
        // Non-analytic demonstrations
        Figure::scalar("re", (-2.0, 2.0), (-2.0, 2.0), |z| Complex64::from(z.re)),
        Figure::scalar("z-absz", (-2.0, 2.0), (-2.0, 2.0), |z| z / z.norm()),
        Figure::scalar("conj", (-2.0, 2.0), (-2.0, 2.0), |z| z.conj()),
        // Essential singularities
        Figure::scalar("exp1z", (-1.0, 1.0), (-1.0, 1.0), |z| z.inv().exp()),
        Figure::scalar("zsin1z", (-0.6, 0.6), (-0.6, 0.6), |z| z * z.inv().sin()),
        Figure::scalar("cos1z", (-0.6, 0.6), (-0.6, 0.6), |z| z.inv().cos()),
        //
        Figure::scalar("exp-z2", (-3.0, 3.0), (-3.0, 3.0), |z| (-(z * z)).exp()),
        Figure::scalar("11z2", (-3.0, 3.0), (-3.0, 3.0), |z| (1.0 + z * z).inv()),
        Figure::scalar("exp1z1", (-1.0, 1.0), (-1.0, 1.0), |z| {
            let e = z.inv().exp();
            e / (1.0 + e)
        }),
        // Generating function of the Fibonacci sequence
        Figure::scalar("fibonacci", (-5.0, 5.0), (-5.0, 5.0), |z| {
            (1.0 - z * (1.0 + z)).inv()
        }),
        //
        Figure::scalar("sin", (-5.0, 5.0), (-5.0, 5.0), |z| z.sin()),
        Figure::scalar("cos", (-5.0, 5.0), (-5.0, 5.0), |z| z.cos()),
        Figure::scalar("tan", (-5.0, 5.0), (-5.0, 5.0), |z| z.tan()),
        //
        Figure::scalar("sec", (-5.0, 5.0), (-5.0, 5.0), |z| z.cos().inv()),
        Figure::scalar("csc", (-5.0, 5.0), (-5.0, 5.0), |z| z.sin().inv()),
        Figure::scalar("cot", (-5.0, 5.0), (-5.0, 5.0), |z| z.tan().inv()),
        //
        Figure::scalar("sinh", (-5.0, 5.0), (-5.0, 5.0), |z| z.sinh()),
        Figure::scalar("cosh", (-5.0, 5.0), (-5.0, 5.0), |z| z.cosh()),
        Figure::scalar("tanh", (-5.0, 5.0), (-5.0, 5.0), |z| z.tanh()),
        //
        Figure::scalar("sech", (-5.0, 5.0), (-5.0, 5.0), |z| z.cosh().inv()),
        Figure::scalar("csch", (-5.0, 5.0), (-5.0, 5.0), |z| z.sinh().inv()),
        Figure::scalar("coth", (-5.0, 5.0), (-5.0, 5.0), |z| z.tanh().inv()),
        //
        Figure::scalar("arcsin", (-2.0, 2.0), (-2.0, 2.0), |z| z.asin()),
        Figure::scalar("arccos", (-2.0, 2.0), (-2.0, 2.0), |z| z.acos()),
        Figure::scalar("arctan", (-2.0, 2.0), (-2.0, 2.0), |z| z.atan()),
        //
        Figure::scalar("arcsinh", (-2.0, 2.0), (-2.0, 2.0), |z| z.asinh()),
        Figure::scalar("arccosh", (-2.0, 2.0), (-2.0, 2.0), |z| z.acosh()),
        Figure::scalar("arctanh", (-2.0, 2.0), (-2.0, 2.0), |z| z.atanh()),
        //
        Figure::scalar("sinz-z", (-7.0, 7.0), (-7.0, 7.0), |z| z.sin() / z),
        Figure::scalar("cosz-z", (-7.0, 7.0), (-7.0, 7.0), |z| z.cos() / z),
        Figure::scalar("tanz-z", (-7.0, 7.0), (-7.0, 7.0), |z| z.tan() / z),
        // Logistic sigmoid
        Figure::scalar("sigmoid", (-10.0, 10.0), (-10.0, 10.0), |z| {
            (1.0 + (-z).exp()).inv()
        }),
        // Double-exponential quadrature maps
        Figure::scalar("tanh-sinh", (-2.5, 2.5), (-2.5, 2.5), |z| {
            (PI / 2.0 * z.sinh()).tanh()
        }),
        Figure::scalar("sinh-sinh", (-2.5, 2.5), (-2.5, 2.5), |z| {
            (PI / 2.0 * z.sinh()).sinh()
        }),
        Figure::scalar("exp-sinh", (-2.5, 2.5), (-2.5, 2.5), |z| {
            (PI / 2.0 * z.sinh()).exp()
        }),
        // Zeta family
        Figure::grid("zeta", (-30.0, 30.0), (-30.0, 30.0), |g| zeta(g)),
        Figure::grid("bernoulli", (-30.0, 30.0), (-30.0, 30.0), |g| bernoulli(g)),
        Figure::grid("dirichlet-eta", (-30.0, 30.0), (-30.0, 30.0), |g| {
            dirichlet_eta(g)
        }),
        Figure::grid("hurwitz-zeta-1-3", (-10.0, 10.0), (-10.0, 10.0), |g| {
            hurwitz_zeta(g, Complex64::from(1.0 / 3.0))
        }),
        Figure::grid("hurwitz-zeta-24-25", (-10.0, 10.0), (-10.0, 10.0), |g| {
            hurwitz_zeta(g, Complex64::from(24.0 / 25.0))
        }),
        Figure::grid("hurwitz-zeta-a-3-4i", (-10.0, 10.0), (-10.0, 10.0), |g| {
            hurwitz_zeta_a(Complex64::new(3.0, 4.0), g)
        }),
        Figure::grid("riemann-xi", (-20.0, 20.0), (-20.0, 20.0), |g| riemann_xi(g)),
        // Gamma family
        Figure::scalar("gamma", (-5.0, 5.0), (-5.0, 5.0), gamma),
        Figure::scalar("reciprocal-gamma", (-5.0, 5.0), (-5.0, 5.0), |z| {
            gamma(z).inv()
        }),
        Figure::scalar("digamma", (-5.0, 5.0), (-5.0, 5.0), digamma),
        Figure::grid("polygamma1", (-5.0, 5.0), (-5.0, 5.0), |g| polygamma(g, 1)),
        Figure::grid("polygamma2", (-5.0, 5.0), (-5.0, 5.0), |g| polygamma(g, 2)),
        // Lambert series and the Euler function, on the unit disk
        Figure::grid("lambert-1", (-1.1, 1.1), (-1.1, 1.1), |g| {
            lambert_1(g, LAMBERT_1_TERMS)
        }),
        Figure::grid("lambert-von-mangoldt", (-1.1, 1.1), (-1.1, 1.1), |g| {
            lambert_von_mangoldt(g, VON_MANGOLDT_TERMS)
        }),
        Figure::grid("lambert-liouville", (-1.1, 1.1), (-1.1, 1.1), |g| {
            lambert_liouville(g, LIOUVILLE_TERMS)
        }),
        Figure::grid("euler-function", (-1.1, 1.1), (-1.1, 1.1), |g| {
            euler_function(g, EULER_TERMS)
        }),
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let figures = gallery();

    if cli.list {
        for figure in &figures {
            println!("{}", figure.name);
        }
        return Ok(());
    }

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;

    let mut written = 0_usize;
    for figure in figures
        .iter()
        .filter(|f| cli.filter.as_deref().map_or(true, |p| f.name.contains(p)))
    {
        let path = cli.out_dir.join(format!("{}.png", figure.name));
        tracing::debug!(
            "{}: x in [{}, {}], y in [{}, {}]",
            figure.name,
            figure.x.0,
            figure.x.1,
            figure.y.0,
            figure.y.1
        );

        Plot::new(&figure.function)
            .x_range(figure.x.0, figure.x.1)
            .y_range(figure.y.0, figure.y.1)
            .resolution(cli.resolution)
            .abs_scaling(figure.abs_scaling)
            .mode(figure.mode)
            .save(&path)
            .with_context(|| format!("rendering {}", path.display()))?;

        tracing::info!("Wrote {}", path.display());
        written += 1;
    }

    tracing::info!("{} figure(s) in {}", written, cli.out_dir.display());
    Ok(())
}
