use hello_lambda::handler;
use lamedh_runtime::{handler_fn, run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    simple_logger::init_with_level(log::Level::Info)?;

    run(handler_fn(handler)).await?;
    Ok(())
}
