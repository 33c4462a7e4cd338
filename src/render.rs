//! Attribute-driven rendering on top of [`Provider::translate`].
//!
//! The host supplies element access through [`RenderTarget`] and [`Element`];
//! this module only decides which attributes to read and what to write.
//!
//! For a marker attribute `phrase`:
//!
//! - `phrase="nav.home"` translates into the element's text
//! - `phrase-html` (present) writes the translation as HTML instead
//! - `phrase-title="nav.tooltip"` translates into the `title` attribute

use crate::{
    config::Config,
    core::{Provider, Warning},
};

/// Mutable access to one element.
pub trait Element {
    fn attribute(&self, name: &str) -> Option<String>;
    fn attribute_names(&self) -> Vec<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);
    fn set_text(&mut self, text: &str);
    fn set_html(&mut self, html: &str);
}

/// A root that can enumerate its descendants carrying a given attribute.
pub trait RenderTarget {
    fn for_each_marked(&mut self, attribute: &str, visit: &mut dyn FnMut(&mut dyn Element));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub target_attribute: String,
    pub ignore_attributes: bool,
    pub remove_attributes_on_render: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::from(&Config::default())
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            target_attribute: config.target_attribute.clone(),
            ignore_attributes: config.ignore_attributes,
            remove_attributes_on_render: config.remove_attributes_on_render,
        }
    }
}

/// What a render pass touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub elements: usize,
    pub contents_written: usize,
    pub attributes_written: usize,
}

pub struct Renderer<'a> {
    provider: &'a Provider,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(provider: &'a Provider, options: RenderOptions) -> Self {
        Self { provider, options }
    }

    /// Translate every marked element below `target`.
    ///
    /// A missing target is reported as [`Warning::MissingRenderTarget`].
    pub fn render(&self, target: Option<&mut dyn RenderTarget>) -> RenderSummary {
        let mut summary = RenderSummary::default();
        let Some(target) = target else {
            self.provider.report(Warning::MissingRenderTarget);
            return summary;
        };

        let marker = self.options.target_attribute.as_str();
        target.for_each_marked(marker, &mut |element| {
            summary.elements += 1;
            if self.render_content(element) {
                summary.contents_written += 1;
            }
            if !self.options.ignore_attributes {
                summary.attributes_written += self.render_attributes(element);
            }
            if self.options.remove_attributes_on_render {
                self.remove_markers(element);
            }
        });
        summary
    }

    /// Content is left alone when translation fell back to the token.
    fn render_content(&self, element: &mut dyn Element) -> bool {
        let Some(token) = element.attribute(&self.options.target_attribute) else {
            return false;
        };
        let translated = self.provider.translate(&token, None, None);
        if translated == token {
            return false;
        }

        if element.attribute(&self.html_marker()).is_some() {
            element.set_html(&translated);
        } else {
            element.set_text(&translated);
        }
        true
    }

    fn render_attributes(&self, element: &mut dyn Element) -> usize {
        let prefix = format!("{}-", self.options.target_attribute);
        let html_marker = self.html_marker();
        let mut written = 0;

        for name in element.attribute_names() {
            if name == html_marker {
                continue;
            }
            let Some(target_name) = name.strip_prefix(&prefix).filter(|n| !n.is_empty()) else {
                continue;
            };
            let Some(token) = element.attribute(&name) else {
                continue;
            };
            let translated = self.provider.translate(&token, None, None);
            element.set_attribute(target_name, &translated);
            written += 1;
        }
        written
    }

    fn remove_markers(&self, element: &mut dyn Element) {
        let marker = &self.options.target_attribute;
        let prefix = format!("{}-", marker);
        for name in element.attribute_names() {
            if &name == marker || name.starts_with(&prefix) {
                element.remove_attribute(&name);
            }
        }
    }

    fn html_marker(&self) -> String {
        format!("{}-html", self.options.target_attribute)
    }
}
