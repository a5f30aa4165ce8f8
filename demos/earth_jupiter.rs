use glam::DVec2;
use orbits::prelude::*;

// Usage: earth_jupiter [step in months] [end time in months]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let step_months: f64 = args.next().map_or(Ok(0.5), |arg| arg.parse())?;
    let end_months: f64 = args.next().map_or(Ok(24.0), |arg| arg.parse())?;

    let dt = units::months_to_whole_seconds(step_months);
    let end = units::months_to_whole_seconds(end_months);

    // Collection of the sun, held at the origin, and two planets. The planets also attract each
    // other, and no body records the one it orbits.
    let mut registry = Registry::from(vec![
        Body::new(DVec2::ZERO, DVec2::ZERO, units::SUN_MASS)?
            .with_name("Sun")
            .anchored(),
        Body::new(
            DVec2::new(0.0, units::AU),
            DVec2::new(30_000.0, 0.0),
            units::EARTH_MASS,
        )?
        .with_name("Earth"),
        Body::new(
            DVec2::new(0.0, 816.62e9),
            DVec2::new(13_070.0, 0.0),
            units::JUPITER_MASS,
        )?
        .with_name("Jupiter"),
    ]);

    let mut engine = Engine::new(Config::new());
    let mut trails = Trails::for_config(&registry, engine.config());
    trails.record(&registry);

    let steps = engine.run(&mut registry, dt, end, |step, registry| {
        trails.record(registry);

        let time = step as f64 * dt / units::SECONDS_PER_MONTH;
        print!("{time:>8.2} months");
        for body in registry.iter().filter(|body| !body.is_fixed()) {
            let position = body.position / units::AU;
            print!(
                "  {:>8} ({:>7.3}, {:>7.3}) AU",
                body.name().unwrap_or("?"),
                position.x,
                position.y
            );
        }
        println!();
    })?;

    println!("{steps} steps of {dt} s");
    for (body, trail) in registry.iter().zip(trails.iter()) {
        if let (Some(first), Some(last)) = (trail.iter().next(), trail.latest()) {
            println!(
                "{:>8}: {} positions kept, travelled {:.3} AU from start",
                body.name().unwrap_or("?"),
                trail.len(),
                first.distance(last) / units::AU
            );
        }
    }

    Ok(())
}
