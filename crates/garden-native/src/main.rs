//! Headless replay of the memory garden.
//!
//! Builds the garden, then feeds a scripted list of clicks, touches and
//! waits through the same picking and popup code the browser uses. Popup
//! transitions are logged; run with `RUST_LOG=debug` to see misses too.
//!
//! ```text
//! garden-native [--seed N] [--size WxH] [--simple] click:640,360 wait:2 touch:100,80 touch: wait:7
//! ```

use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use garden_core::{
    animation, select, Garden, GardenConfig, ManualTimers, MeasuredSurface, OrbitCamera,
    PointerInput, PopupConfig, PopupPresenter, PopupState, Viewport,
};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Click(Vec2),
    Touch(Option<Vec2>),
    Wait(Duration),
}

struct Args {
    seed: u64,
    viewport: Viewport,
    simple: bool,
    steps: Vec<Step>,
}

fn parse_point(s: &str) -> anyhow::Result<Vec2> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected X,Y but got {s:?}"))?;
    Ok(Vec2::new(x.trim().parse()?, y.trim().parse()?))
}

fn parse_step(s: &str) -> anyhow::Result<Step> {
    let (kind, rest) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("step {s:?} needs a kind prefix"))?;
    match kind {
        "click" => Ok(Step::Click(parse_point(rest)?)),
        "touch" if rest.is_empty() => Ok(Step::Touch(None)),
        "touch" => Ok(Step::Touch(Some(parse_point(rest)?))),
        "wait" => {
            let secs: f64 = rest.parse().with_context(|| format!("bad wait {rest:?}"))?;
            if !(secs.is_finite() && secs >= 0.0) {
                bail!("wait must be a non-negative number of seconds");
            }
            Ok(Step::Wait(Duration::from_secs_f64(secs)))
        }
        other => bail!("unknown step kind {other:?}"),
    }
}

fn parse_args(mut it: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut args = Args {
        seed: GardenConfig::default().seed,
        viewport: Viewport::new(1280.0, 720.0),
        simple: false,
        steps: Vec::new(),
    };
    while let Some(a) = it.next() {
        match a.as_str() {
            "--seed" => {
                let v = it.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                args.seed = v.parse().context("--seed")?;
            }
            "--size" => {
                let v = it.next().ok_or_else(|| anyhow!("--size needs WxH"))?;
                let (w, h) = v
                    .split_once('x')
                    .ok_or_else(|| anyhow!("--size expects WxH, got {v:?}"))?;
                args.viewport = Viewport::new(w.parse()?, h.parse()?);
            }
            "--simple" => args.simple = true,
            step => args.steps.push(parse_step(step)?),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args(std::env::args().skip(1))?;

    let mut garden = Garden::build(&GardenConfig {
        seed: args.seed,
        ..GardenConfig::default()
    })?;
    let orbit = OrbitCamera::default();
    let camera = orbit.camera(args.viewport.aspect());
    let config = if args.simple {
        PopupConfig::simple()
    } else {
        PopupConfig::default()
    };
    let mut presenter = PopupPresenter::new(MeasuredSurface::default(), ManualTimers::new(), config);

    let frame = Duration::from_secs_f32(1.0 / 60.0);
    for step in &args.steps {
        let input = match step {
            Step::Wait(d) => {
                // step the scene at frame rate so the clock and motion agree
                let mut left = *d;
                while !left.is_zero() {
                    let dt = left.min(frame);
                    presenter.advance(dt);
                    left -= dt;
                    let t = presenter.timers().elapsed().as_secs_f32();
                    animation::tick(&mut garden, t, dt.as_secs_f32(), orbit.eye());
                }
                continue;
            }
            Step::Click(p) => PointerInput::mouse(p.x, p.y),
            Step::Touch(p) => PointerInput::touch(p.iter().copied()),
        };
        match select(&garden.scene, &camera, args.viewport, &input) {
            Some(sel) => {
                presenter.show(&sel.payload, sel.anchor, args.viewport);
                log::info!(
                    "[replay] {:?} -> {:?} \"{}\"{}",
                    step,
                    sel.entity,
                    sel.payload.text(),
                    sel.payload
                        .image()
                        .map(|i| format!(" [{i}]"))
                        .unwrap_or_default()
                );
            }
            None => log::info!("[replay] {:?} -> nothing", step),
        }
    }

    match presenter.state() {
        PopupState::Showing(shown) => println!(
            "showing \"{}\" at ({:.0},{:.0})",
            shown.content.text(),
            shown.position.x,
            shown.position.y
        ),
        PopupState::Hidden => println!("hidden"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        assert_eq!(parse_step("click:10,20").unwrap(), Step::Click(Vec2::new(10.0, 20.0)));
        assert_eq!(parse_step("touch:").unwrap(), Step::Touch(None));
        assert_eq!(parse_step("wait:1.5").unwrap(), Step::Wait(Duration::from_millis(1500)));
        assert!(parse_step("jump:1").is_err());
        assert!(parse_step("wait:-1").is_err());
    }

    #[test]
    fn parses_flags() {
        let argv = ["--seed", "7", "--size", "800x600", "--simple", "click:1,2"];
        let args = parse_args(argv.iter().map(|s| s.to_string())).unwrap();
        assert_eq!(args.seed, 7);
        assert_eq!(args.viewport, Viewport::new(800.0, 600.0));
        assert!(args.simple);
        assert_eq!(args.steps.len(), 1);
    }
}
