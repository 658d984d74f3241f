use axum::response::Html;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

#[derive(Serialize)]
struct Layout {
    inner: String,
}

/// Registers the embedded templates. Every page renders into the `layout`
/// shell.
pub(crate) fn create_engine() -> Result<Handlebars<'static>, TemplateError> {
    let mut engine = Handlebars::new();
    engine.register_template_string("layout", include_str!("../templates/layout.hbs"))?;
    engine.register_template_string("index", include_str!("../templates/index.hbs"))?;
    engine.register_template_string("topics", include_str!("../templates/topics.hbs"))?;
    engine.register_template_string("topic", include_str!("../templates/topic.hbs"))?;
    engine.register_template_string("new_topic", include_str!("../templates/new_topic.hbs"))?;
    engine.register_template_string("new_entry", include_str!("../templates/new_entry.hbs"))?;
    engine.register_template_string("edit_entry", include_str!("../templates/edit_entry.hbs"))?;
    Ok(engine)
}

pub(crate) fn render<T: Serialize>(
    engine: &Handlebars<'static>,
    template: &str,
    data: &T,
) -> Result<Html<String>, RenderError> {
    let inner = engine.render(template, data)?;
    let html = engine.render("layout", &Layout { inner })?;
    Ok(Html(html))
}
