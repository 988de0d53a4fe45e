//! HTML rendering with minijinja templates.

use minijinja::{context, Environment};
use thesis_doc_content::{slugify, Document};

use crate::assets::Stylesheet;
use crate::traits::{Format, RenderError, Renderer};

/// Page-level settings that are not part of the document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Base URL the page is served under
    pub base_url: String,
    /// Extra stylesheet URLs, linked before the main stylesheet
    pub styles: Vec<String>,
}

impl PageOptions {
    /// Options linking the given stylesheets from `{base_url}assets/`.
    pub fn with_stylesheets(base_url: &str, sheets: &[Stylesheet]) -> Self {
        Self {
            base_url: base_url.to_string(),
            styles: sheets
                .iter()
                .map(|s| format!("{}assets/{}", base_url, s.file_name))
                .collect(),
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            styles: vec![],
        }
    }
}

/// Renders the document as a standalone HTML page.
pub struct HtmlRenderer {
    env: Environment<'static>,
    page: PageOptions,
}

impl HtmlRenderer {
    /// Create a renderer with default page options.
    pub fn new() -> Self {
        Self::with_options(PageOptions::default())
    }

    /// Create a renderer with custom page options.
    pub fn with_options(page: PageOptions) -> Self {
        let mut env = Environment::new();

        // Templates are compiled into the binary; the loader only hands them out.
        env.set_loader(|name| Ok(template_source(name).map(str::to_string)));
        env.add_filter("slugify", |title: String| slugify(&title));

        Self { env, page }
    }

    /// Page options used for rendering.
    pub fn options(&self) -> &PageOptions {
        &self.page
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn format(&self) -> Format {
        Format::Html
    }

    fn render(&self, doc: &Document) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("document.html")?;

        let html = tmpl.render(context! {
            doc => doc,
            base_url => &self.page.base_url,
            styles => &self.page.styles,
        })?;

        Ok(html)
    }
}

fn template_source(name: &str) -> Option<&'static str> {
    match name {
        "base.html" => Some(BASE_TEMPLATE),
        "document.html" => Some(DOCUMENT_TEMPLATE),
        "macros.html" => Some(MACROS_TEMPLATE),
        _ => None,
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ doc.header.title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <div class="page">
    {% block page %}{% endblock %}
  </div>
</body>
</html>
"##;

const DOCUMENT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block page %}
{% from "macros.html" import rich %}
<header class="page-header">
  <nav class="page-nav">
    <h1 class="page-title">{{ doc.header.title }}</h1>
    <div class="page-tagline">{{ doc.header.tagline }}</div>
  </nav>
</header>

<main class="page-main">
{% for section in doc.sections %}
  <section class="section" id="{{ section.title | slugify }}">
    <h2>{{ section.title }}</h2>
    {% if section.intro %}<p class="intro">{{ rich(section.intro) }}</p>{% endif %}
    {% set body = section.body %}
    {% if body.kind == "paragraph" %}
    <p>{{ rich(body.content) }}</p>
    {% elif body.kind == "ordered_list" %}
    <ol class="list-ordered">
    {% for item in body.content %}  <li>{{ rich(item) }}</li>
    {% endfor %}</ol>
    {% elif body.kind == "unordered_list" %}
    <ul class="list-bulleted">
    {% for item in body.content %}  <li>{{ rich(item) }}</li>
    {% endfor %}</ul>
    {% elif body.kind == "two_column" %}
    <div class="columns">
    {% for column in [body.content.left, body.content.right] %}
      <div class="column">
        <h3 id="{{ column.title | slugify }}">{{ column.title }}</h3>
        <ul class="list-bulleted">
        {% for item in column.items %}  <li>{{ rich(item) }}</li>
        {% endfor %}</ul>
      </div>
    {% endfor %}
    </div>
    {% elif body.kind == "code_block" %}
    <pre class="code-block">{{ body.content }}</pre>
    {% endif %}
    {% if section.note %}<p class="note note-{{ section.note.tone }}">{{ rich(section.note.text) }}</p>{% endif %}
  </section>
{% endfor %}

  <footer class="page-footer">
    <div class="footer-lead">{{ doc.footer.lead }}</div>
    <ul class="list-bulleted">
    {% for item in doc.footer.items %}  <li>{{ rich(item) }}</li>
    {% endfor %}</ul>
  </footer>
</main>
{% endblock %}
"##;

const MACROS_TEMPLATE: &str = r##"{% macro rich(runs) -%}
{%- for run in runs -%}
{%- if run.kind == "strong" -%}<strong>{{ run.text }}</strong>
{%- elif run.kind == "code" -%}<code>{{ run.text }}</code>
{%- else -%}{{ run.text }}
{%- endif -%}
{%- endfor -%}
{%- endmacro %}
"##;
