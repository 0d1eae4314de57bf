use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use log::{info, warn};
use quartz_core::{tick::TickTable, watch::Watch};

use keyboard::KeyboardInput;
use terminal::TerminalDisplay;

#[path = "main/config.rs"]
mod config;
#[path = "main/keyboard.rs"]
mod keyboard;
#[path = "main/logger.rs"]
mod logger;
#[path = "main/terminal.rs"]
mod terminal;

const IDLE_WAKE_MS: u64 = 1_000;
const STATS_INTERVAL_MS: u64 = 60_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    logger::init();

    let config = config::from_env();
    let mut watch = Watch::new(TerminalDisplay::stdout(), TickTable::new(), config);
    let mut input = KeyboardInput;

    if let Err(err) = keyboard::spawn_reader() {
        warn!("keyboard: reader thread failed to start: {:?}", err);
    }

    info!(
        "Watch started: military={} light_timeout_ms={}",
        config.military, config.light_timeout_ms
    );
    info!("Keys: 1/a=light 2/s=mode-op 3/d=set 4/f=mode, q=quit");

    let loop_start = Instant::now();
    watch.power_on(0);

    let ui_future = async {
        let mut report_presses = 0usize;
        let mut report_start_ms = 0u64;

        loop {
            let now_ms = loop_start.elapsed().as_millis();

            match watch.process_inputs(&mut input, now_ms) {
                Ok(handled) => report_presses = report_presses.saturating_add(handled),
                Err(never) => match never {},
            }

            while let Some(kind) = watch.scheduler_mut().take_due(now_ms) {
                watch.on_tick(kind, now_ms);
            }

            if now_ms.saturating_sub(report_start_ms) >= STATS_INTERVAL_MS {
                info!(
                    "stats: presses={} mode={:?} alarm_armed={} elapsed_ms={}",
                    report_presses,
                    watch.mode(),
                    watch.alarm().is_armed(),
                    now_ms
                );
                report_presses = 0;
                report_start_ms = now_ms;
            }

            // Sleep until the next tick deadline or the next key, whichever comes first.
            let wake_ms = watch
                .scheduler()
                .next_deadline()
                .unwrap_or(now_ms.saturating_add(IDLE_WAKE_MS));
            let wake_at = loop_start + Duration::from_millis(wake_ms);
            let _ = select(Timer::at(wake_at), keyboard::key_ready()).await;
        }
    };

    match select(ui_future, keyboard::quit_requested()).await {
        Either::First(_) => unreachable!(),
        Either::Second(()) => info!("Watch stopped"),
    }
    std::process::exit(0);
}
