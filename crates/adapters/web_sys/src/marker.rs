//! `classList` of the page root as a [`ThemeMarker`].

use darkmode_app::ports::ThemeMarker;
use darkmode_domain::error::{DarkModeError, MarkerError};
use darkmode_domain::settings::MarkerTarget;
use web_sys::{DomTokenList, Element};

use crate::js_reason;

/// Marker class on `<body>` or `<html>`.
#[derive(Debug, Clone)]
pub struct RootClassMarker {
    class: String,
    target: MarkerTarget,
}

impl RootClassMarker {
    #[must_use]
    pub fn new(class: impl Into<String>, target: MarkerTarget) -> Self {
        Self {
            class: class.into(),
            target,
        }
    }

    fn failure(&self, operation: &'static str, reason: String) -> DarkModeError {
        MarkerError {
            operation,
            class: self.class.clone(),
            reason,
        }
        .into()
    }

    fn element(&self, operation: &'static str) -> Result<Element, DarkModeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| self.failure(operation, "no document".to_string()))?;
        let element = match self.target {
            MarkerTarget::Body => document.body().map(Element::from),
            MarkerTarget::DocumentElement => document.document_element(),
        };
        element.ok_or_else(|| self.failure(operation, format!("no {:?} element", self.target)))
    }

    fn class_list(&self, operation: &'static str) -> Result<DomTokenList, DarkModeError> {
        self.element(operation).map(|el| el.class_list())
    }
}

impl ThemeMarker for RootClassMarker {
    fn is_present(&self) -> Result<bool, DarkModeError> {
        Ok(self.class_list("read")?.contains(&self.class))
    }

    fn toggle(&self) -> Result<(), DarkModeError> {
        self.class_list("toggle")?
            .toggle(&self.class)
            .map(|_| ())
            .map_err(|err| self.failure("toggle", js_reason(&err)))
    }

    fn add(&self) -> Result<(), DarkModeError> {
        self.class_list("add")?
            .add_1(&self.class)
            .map_err(|err| self.failure("add", js_reason(&err)))
    }
}
