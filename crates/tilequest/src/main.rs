mod app;

use runtime::{run_app, RuntimeContext};
use tracing::error;

use app::bootstrap::build_app;

fn main() {
    let wiring = build_app();

    let context = match RuntimeContext::init(wiring.config) {
        Ok(context) => context,
        Err(err) => {
            error!(error = %err, "failed to initialize runtime");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_app(context, wiring.scene_a, wiring.scene_b) {
        error!(error = %err, "event loop terminated with error");
        std::process::exit(1);
    }
}
