mod app;

use app::ConsoleApp;

fn main() {
    let mut app = ConsoleApp::new();
    app.run();
}
