//! Terminal animation driver: a repeating tokio interval on a
//! current-thread runtime, cooperatively cancelled via the composition's
//! `animating` flag. All mutation stays on this one thread, matching the
//! engine's single-actor model.

use anyhow::Result;
use log::info;
use tokio::time::{interval, MissedTickBehavior};

use panawave_core::{Composition, OrbitMethod, TICK_INTERVAL};

pub fn run(composition: &mut Composition, method: OrbitMethod, ticks: u32) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(drive(composition, method, ticks));
    Ok(())
}

async fn drive(composition: &mut Composition, method: OrbitMethod, ticks: u32) {
    composition.orbit(method);
    if !composition.animating() {
        info!("nothing to animate");
        return;
    }
    let mut timer = interval(TICK_INTERVAL);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    for frame in 0..ticks {
        // A stopped composition would ignore further ticks; don't bother
        // scheduling them.
        if !composition.animating() {
            break;
        }
        timer.tick().await;
        composition.tick();
        let offsets: Vec<String> = composition
            .rings()
            .map(|r| format!("{}: {:7.2}°", r.id(), r.offset_degrees()))
            .collect();
        println!("tick {:>4}  {}", frame + 1, offsets.join("  "));
    }
    composition.stop_animation();
}
