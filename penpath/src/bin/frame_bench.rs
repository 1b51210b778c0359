use penpath::{EditSession, Point};
use std::process::ExitCode;
use std::time::Instant;

// Zig-zag of alternating taps and drags, so every segment kind shows up
fn build_session(anchors: usize) -> EditSession {
    let mut s = EditSession::new();
    for i in 0..anchors {
        let x = (i % 100) as f32 * 20.0;
        let y = (i / 100) as f32 * 40.0 + if i % 2 == 0 { 0.0 } else { 15.0 };
        let p = Point::new(x, y);
        s.pointer_down(p);
        let release = if i % 3 == 0 { p } else { Point::new(x + 6.0, y - 9.0) };
        s.pointer_up(release);
    }
    s
}

struct Opts {
    anchors: usize,
    moves: usize,
    max_median_ms: Option<f64>,
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts { anchors: 2000, moves: 2000, max_median_ms: None };
        for arg in std::env::args().skip(1) {
            let Some((key, val)) = arg.split_once('=') else { continue };
            match key {
                "--anchors" => opts.anchors = val.parse().unwrap_or(opts.anchors),
                "--moves" => opts.moves = val.parse().unwrap_or(opts.moves),
                "--assert-ms" => opts.max_median_ms = val.parse().ok(),
                _ => eprintln!("ignoring unknown option {key}"),
            }
        }
        opts
    }
}

/// Nearest-rank quantile of an ascending sample.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n => sorted[((n as f64 * q).ceil() as usize).clamp(1, n) - 1],
    }
}

fn main() -> ExitCode {
    let opts = Opts::from_args();
    let mut s = build_session(opts.anchors);
    // Press on empty canvas below the drawing and drag around
    let origin = Point::new(-500.0, -500.0);
    s.pointer_down(origin);

    let mut samples: Vec<f64> = Vec::with_capacity(opts.moves);
    let mut commands = 0usize;
    let run = Instant::now();
    for k in 0..opts.moves {
        let p = Point::new(origin.x + (k % 50) as f32, origin.y + (k / 50) as f32);
        let t0 = Instant::now();
        s.pointer_move(p);
        commands += s.frame().path.len();
        samples.push(t0.elapsed().as_secs_f64() * 1e3);
    }
    let total = run.elapsed().as_secs_f64() * 1e3;
    s.pointer_up(origin);

    samples.sort_by(f64::total_cmp);
    let median = quantile(&samples, 0.5);
    println!(
        "anchors={} moves={} commands={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}",
        opts.anchors,
        opts.moves,
        commands,
        total,
        median,
        quantile(&samples, 0.9),
        quantile(&samples, 0.99),
    );
    match opts.max_median_ms {
        Some(limit) if median > limit => {
            eprintln!("frame median {median:.4} ms exceeds {limit:.3} ms");
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    }
}
