//! HTML templates
//!
//! Templates are compiled into the binary and loaded once at startup.
//! `.html` names get minijinja's HTML auto-escaping.

use minijinja::{context, Environment};

use todoctl_core::TodoItem;

const INDEX: &str = include_str!("../../templates/index.html");
const EDIT: &str = include_str!("../../templates/edit.html");

/// Loaded template environment
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX)?;
        env.add_template("edit.html", EDIT)?;
        Ok(Self { env })
    }

    /// Render the full todo list.
    pub fn index(&self, todos: &[TodoItem]) -> Result<String, minijinja::Error> {
        self.env
            .get_template("index.html")?
            .render(context! { todos => todos })
    }

    /// Render the edit form for one item.
    pub fn edit(&self, todo: &TodoItem) -> Result<String, minijinja::Error> {
        self.env
            .get_template("edit.html")?
            .render(context! { todo => todo })
    }
}
