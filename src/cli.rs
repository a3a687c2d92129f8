use crate::FailResult;
use crate::logging;

use ::clap::{App, Arg, ArgMatches};
use ::flatmat_dense::{eye, zeros, linspace, max_index, linear_index, matrix_index};
use ::flatmat_dense::{print_table, print_linear};
use ::std::ffi::OsStr;

/// Entry point for the `flatmat-demo` binary.
pub fn demo_main() {
    wrap_result_main(demo);
}

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        ::std::process::exit(1);
    });
}

fn demo() -> FailResult<()> {
    let matches = App::new("flatmat-demo")
        .about("Exercise the flatmat routines against small sample data.")
        .args(&[
            Arg::with_name("rows").short("m").long("rows")
                .takes_value(true).default_value("4")
                .help("rows in the generated matrices"),
            Arg::with_name("cols").short("n").long("cols")
                .takes_value(true).default_value("4")
                .help("columns in the generated matrices"),
            Arg::with_name("from").long("from")
                .takes_value(true).default_value("0")
                .help("lower endpoint of the sample vector"),
            Arg::with_name("to").long("to")
                .takes_value(true).default_value("1")
                .help("upper endpoint of the sample vector"),
            Arg::with_name("points").long("points")
                .takes_value(true).default_value("5")
                .help("number of samples in the vector"),
            Arg::with_name("verbose").short("v").long("verbose")
                .help("show trace output"),
        ])
        .get_matches();

    logging::init(matches.is_present("verbose"))?;

    let m: usize = parsed_value(&matches, "rows")?;
    let n: usize = parsed_value(&matches, "cols")?;
    let x0: f32 = parsed_value(&matches, "from")?;
    let x1: f32 = parsed_value(&matches, "to")?;
    let points: usize = parsed_value(&matches, "points")?;

    let dim = (m, n);
    let mut a = vec![0.0; m * n];

    info!("{}x{} identity:", m, n);
    eye(dim, &mut a)?;
    print_table(dim, &a)?;

    let diagonal = (0..m.min(n))
        .map(|i| linear_index(dim, (i, i)))
        .collect::<FailResult<Vec<_>>>()?;
    debug!("diagonal offsets: {:?}", diagonal);

    info!("same matrix, in linear form:");
    print_linear(dim, &a)?;

    info!("{}x{} zeros:", m, n);
    zeros(dim, &mut a)?;
    print_table(dim, &a)?;

    info!("{} samples from {} to {}:", points, x0, x1);
    let mut v = vec![0.0; points];
    linspace(x0, x1, &mut v)?;
    print_linear((1, points), &v)?;

    let imax = max_index(&v)?;
    let (row, col) = matrix_index((1, points), imax)?;
    info!("largest sample at entry ({}, {}): {}", row, col, v[imax]);

    Ok(())
}

fn parsed_value<T>(matches: &ArgMatches<'_>, name: &str) -> FailResult<T>
where
    T: ::std::str::FromStr,
    T::Err: ::failure::Fail,
{
    match matches.value_of(name) {
        None => bail!("missing value for --{}", name),
        Some(s) => Ok(s.parse()?),
    }
}
