use std::io::{self, BufRead as _};

use clickcount::{conf::Conf, display::WriterDisplay, log::prelude::*, App};
use dotenv::dotenv;
use failure::Error;

fn main() -> Result<(), Error> {
    dotenv().ok();

    let config = Conf::parse()?;

    // Stdout is reserved for the rendered count.
    let logger = clickcount::log::new_conf_logger(
        &config.log,
        io::stderr(),
        io::stderr(),
    );
    let _scope_guard = slog_scope::set_global_logger(logger);

    info!("Initial count: {}", config.counter.initial);

    let mut app = App::new(&config.counter, WriterDisplay::new(io::stdout()));
    app.start()?;

    // Every line on stdin is a single click.
    for line in io::stdin().lock().lines() {
        line?;
        if let Err(e) = app.on_increment_click() {
            error!("Click failed: {}", e);
        }
    }

    app.stop();
    info!("Stopped with count {}", app.counter().peek());

    Ok(())
}
