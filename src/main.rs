use circumplex::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use circumplex::display::{Display, InputEvent, RenderTarget};
use circumplex::{ChartConfig, CircumplexRenderer, PixelBuffer, Surface};
use sdl2::keyboard::Keycode;

struct Args {
    chart: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// Parse command line arguments
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        chart: None,
        width: None,
        height: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--chart" | "-c" => {
                if i + 1 < args.len() {
                    parsed.chart = Some(args[i + 1].clone());
                    i += 1;
                }
            },
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        parsed.width = Some(w);
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        parsed.height = Some(h);
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // WxH, e.g. 600x600
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            parsed.width = Some(w);
                            parsed.height = Some(h);
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: circumplex [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --chart PATH, -c PATH     Load scores and legend from a JSON file");
                println!(
                    "  --width W, -w W           Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H          Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set window size (e.g., 600x600)");
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            other => eprintln!("Ignoring unknown argument {:?}", other),
        }
        i += 1;
    }

    parsed
}

#[cfg(feature = "tracing")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging() {}

fn main() -> Result<(), String> {
    init_logging();
    let args = parse_args();

    let mut chart = match &args.chart {
        Some(path) => ChartConfig::load(path).map_err(|e| e.to_string())?,
        None => ChartConfig::default(),
    };
    if let Some(w) = args.width {
        chart.width = w;
    }
    if let Some(h) = args.height {
        chart.height = h;
    }

    let (mut display, texture_creator) = Display::new(&chart.title, chart.width, chart.height)?;
    let mut target = RenderTarget::new(&texture_creator);
    let mut renderer = CircumplexRenderer::new();
    let mut canvas = PixelBuffer::new();

    println!("=== circumplex ===");
    println!("Chart: {}", chart.title);
    for (label, score) in chart.legend.iter().zip(chart.scores.iter()) {
        println!("  {}  {:.2}", label, score);
    }
    println!("Resize the window to redraw. Escape quits.");

    let (width, height) = display.size();
    canvas.resize(width, height);
    renderer.render(&mut canvas, &chart.scores, &chart.legend);
    display.present(&mut target, &canvas)?;

    'main: loop {
        let mut redraw = false;
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::Resized { width, height } => {
                    canvas.resize(width, height);
                    redraw = true;
                },
                InputEvent::KeyDown(_) => {},
            }
        }

        if redraw {
            renderer.render(&mut canvas, &chart.scores, &chart.legend);
        }
        display.present(&mut target, &canvas)?;
    }

    Ok(())
}
