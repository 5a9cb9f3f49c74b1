use std::error::Error;
use std::path::PathBuf;

use log::{info, warn};

use regview::prelude::*;

const DEMO_POINTS: [(f64, f64); 5] = [(1.0, 1.0), (2.0, 2.0), (3.0, 1.3), (4.0, 3.0), (5.0, 4.5)];

struct Args {
    data: Option<PathBuf>,
    kind: RegressionKind,
    predict: Option<String>,
    save: Option<PathBuf>,
    size: Option<(f64, f64)>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut data: Option<PathBuf> = None;
    let mut kind = RegressionKind::Linear;
    let mut predict: Option<String> = None;
    let mut save: Option<PathBuf> = None;
    let mut size: Option<(f64, f64)> = None;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--kind" => {
                let v = it.next().ok_or("--kind requires a value")?;
                kind = match v.as_str() {
                    "linear" => Linear,
                    "quadratic" => Quadratic,
                    _ => return Err(format!("unknown kind: {v} (expected linear|quadratic)").into()),
                };
            }
            "--predict" => predict = Some(it.next().ok_or("--predict requires a value")?),
            "--save" => save = Some(PathBuf::from(it.next().ok_or("--save requires a path")?)),
            "--size" => {
                let v = it.next().ok_or("--size requires WxH")?;
                let (w, h) = v.split_once('x').ok_or_else(|| format!("bad size: {v}"))?;
                size = Some((w.parse()?, h.parse()?));
            }
            "--help" | "-h" => print_help_and_exit(),
            other if other.starts_with("--") => return Err(format!("unknown arg: {other}").into()),
            path => data = Some(PathBuf::from(path)),
        }
    }

    Ok(Args {
        data,
        kind,
        predict,
        save,
        size,
    })
}

fn print_help_and_exit() -> ! {
    eprintln!(
        "regview [DATA]\n\n  DATA             two-column x,y point file (demo points when empty)\n\n  --kind linear|quadratic\n  --predict <x>    print the model prediction at x\n  --save <path>    write the points to a file\n  --size <WxH>     surface size in pixels (default 800x600)\n\nSet RUST_LOG=info or RUST_LOG=debug for log output.\n"
    );
    std::process::exit(0)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = parse_args()?;

    let mut points = match &args.data {
        Some(path) => PointStore::<f64>::load(path).into_points(),
        None => Vec::new(),
    };
    if points.is_empty() {
        warn!("no points loaded, using demo data");
        points = DEMO_POINTS.iter().map(|&p| Point::from(p)).collect();
    }

    let mut builder = RegressionView::new().kind(args.kind).points(points);
    if let Some((w, h)) = args.size {
        builder = builder.surface(w, h);
    }
    let session = builder.build()?;
    info!("fitted {} model to {} points", session.kind(), session.points().len());

    println!("{}", session.summary());

    if let Some(x) = &args.predict {
        println!("{}", session.predict(x));
    }

    if let Some(path) = &args.save {
        session.save(path)?;
    }

    Ok(())
}
