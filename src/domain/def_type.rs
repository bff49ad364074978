//! Definition types that make up an Aura bundle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Source format reported to the platform alongside a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DefFormat {
    Xml,
    Js,
    Css,
    Svg,
}

impl DefFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefFormat::Xml => "XML",
            DefFormat::Js => "JS",
            DefFormat::Css => "CSS",
            DefFormat::Svg => "SVG",
        }
    }
}

/// One typed member of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DefType {
    Component,
    Controller,
    Helper,
    Renderer,
    Style,
    Event,
    Tokens,
    Documentation,
    Design,
    Svg,
}

impl DefType {
    pub const ALL: [DefType; 10] = [
        DefType::Component,
        DefType::Controller,
        DefType::Helper,
        DefType::Renderer,
        DefType::Style,
        DefType::Event,
        DefType::Tokens,
        DefType::Documentation,
        DefType::Design,
        DefType::Svg,
    ];

    /// Remote `DefType` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DefType::Component => "COMPONENT",
            DefType::Controller => "CONTROLLER",
            DefType::Helper => "HELPER",
            DefType::Renderer => "RENDERER",
            DefType::Style => "STYLE",
            DefType::Event => "EVENT",
            DefType::Tokens => "TOKENS",
            DefType::Documentation => "DOCUMENTATION",
            DefType::Design => "DESIGN",
            DefType::Svg => "SVG",
        }
    }

    pub fn format(&self) -> DefFormat {
        match self {
            DefType::Controller | DefType::Helper | DefType::Renderer => DefFormat::Js,
            DefType::Style => DefFormat::Css,
            DefType::Svg => DefFormat::Svg,
            DefType::Component
            | DefType::Event
            | DefType::Tokens
            | DefType::Documentation
            | DefType::Design => DefFormat::Xml,
        }
    }

    /// Suffix appended to the bundle name to form the file name.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            DefType::Component => ".cmp",
            DefType::Controller => "Controller.js",
            DefType::Helper => "Helper.js",
            DefType::Renderer => "Renderer.js",
            DefType::Style => ".css",
            DefType::Event => ".evt",
            DefType::Tokens => ".tokens",
            DefType::Documentation => ".auradoc",
            DefType::Design => ".design",
            DefType::Svg => ".svg",
        }
    }

    pub fn file_name(&self, bundle: &str) -> String {
        format!("{}{}", bundle, self.file_suffix())
    }

    /// Source used when creating a bundle whose local copy lacks this file.
    pub fn default_source(&self) -> Option<&'static str> {
        match self {
            DefType::Component => Some("<aura:component></aura:component>"),
            DefType::Controller => Some("({\n\tmyAction : function(component, event, helper) {\n\t}\n})"),
            DefType::Helper => Some("({\n\thelperMethod : function() {\n\t}\n})"),
            DefType::Renderer => Some("({\n\t// Your renderer method overrides go here \n})"),
            _ => None,
        }
    }

    /// Human-readable label used in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            DefType::Component => "CMP",
            DefType::Controller => "Controller",
            DefType::Helper => "Helper",
            DefType::Renderer => "Renderer",
            DefType::Style => "Style",
            DefType::Event => "Event",
            DefType::Tokens => "Tokens",
            DefType::Documentation => "Documentation",
            DefType::Design => "Design",
            DefType::Svg => "SVG",
        }
    }
}

impl fmt::Display for DefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DefType::ALL
            .into_iter()
            .find(|def_type| def_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::UnknownDefType(s.to_string()))
    }
}
