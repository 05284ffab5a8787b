mod on_key;
mod ui;

pub use on_key::on_key;
pub use ui::ui;
