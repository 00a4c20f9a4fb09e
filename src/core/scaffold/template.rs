//! Header and source stub templates.
//!
//! Templates are static text with `{{KEY}}` substitution points; all
//! decisions (author joining, include path, namespace) are made while
//! building the [`TemplateContext`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::template::render;

/// Date format used in file banners.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const BANNER_RULE: &str = "//===================================================================================================================================";

const HEADER_TEMPLATE: &str = "{{RULE}}
// @file    {{FILENAME}}.hpp
// @author  {{AUTHOR}}
// @date    {{DATE}}
//
// @brief   {{DESCRIPTION}}
{{RULE}}

#pragma once

// Add your headers here

namespace {{NAMESPACE_SEQUENCE}} {
    // Add tool implementation here
}
";

const SOURCE_TEMPLATE: &str = "{{RULE}}
// @file    utk{{FILENAME}}/{{FILENAME}}.cpp
// @author  {{AUTHOR}}
// @date    {{DATE}}
//
// @brief   {{DESCRIPTION}}
{{RULE}}

#include \"{{HEADER_INCLUDE}}\"

namespace {{NAMESPACE_SEQUENCE}} {

}
";

/// Values substituted into both templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub filename: String,
    pub author: String,
    pub date: String,
    pub description: String,
    pub namespace_sequence: String,
    pub header_include: String,
}

impl TemplateContext {
    pub fn new(
        filename: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        namespace_sequence: impl Into<String>,
        header_include: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            author: author.into(),
            date: date.format(DATE_FORMAT).to_string(),
            description: description.into(),
            namespace_sequence: namespace_sequence.into(),
            header_include: header_include.into(),
        }
    }

    fn variables(&self) -> [(&str, &str); 7] {
        [
            ("RULE", BANNER_RULE),
            ("FILENAME", &self.filename),
            ("AUTHOR", &self.author),
            ("DATE", &self.date),
            ("DESCRIPTION", &self.description),
            ("NAMESPACE_SEQUENCE", &self.namespace_sequence),
            ("HEADER_INCLUDE", &self.header_include),
        ]
    }
}

/// First and last name joined by a single space; either may be missing.
pub fn author_line(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Current local date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn render_header(context: &TemplateContext) -> String {
    render(HEADER_TEMPLATE, &context.variables())
}

pub fn render_source(context: &TemplateContext) -> String {
    render(SOURCE_TEMPLATE, &context.variables())
}
