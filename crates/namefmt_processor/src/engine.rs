/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The formatting service: configured formats, settings and a cache of
//! compiled patterns.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use namefmt_core::{
    Conjunction, DelimiterPrecedesLast, FormatConfig, FormatterSettings, NameComponents,
    DEFAULT_FORMAT_ID,
};
use tracing::{debug, trace};

use crate::error::ProcessorError;
use crate::formatter;
use crate::list;
use crate::pattern::{compile, FormatPattern};
use crate::render::Markup;

/// Formats names and lists of names by configured format identifier.
///
/// Safe to share between threads; compiled patterns are cached by pattern
/// string.
#[derive(Debug)]
pub struct NameFormatter {
    config: FormatConfig,
    settings: FormatterSettings,
    cache: RwLock<HashMap<String, Arc<FormatPattern>>>,
}

impl NameFormatter {
    pub fn new(config: FormatConfig) -> Self {
        let settings = config.settings();
        Self {
            config,
            settings,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// A formatter over the builtin formats.
    pub fn builtin() -> Result<Self, ProcessorError> {
        Ok(Self::new(FormatConfig::builtin()?))
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn settings(&self) -> &FormatterSettings {
        &self.settings
    }

    /// Format one name. `None` selects the default format.
    pub fn format(
        &self,
        components: &NameComponents,
        format_id: Option<&str>,
    ) -> Result<Markup, ProcessorError> {
        let pattern = self.name_pattern(format_id)?;
        Ok(formatter::format(components, &pattern, &self.settings))
    }

    /// Format a list of names with a name format and a list format.
    pub fn format_list(
        &self,
        items: &[NameComponents],
        format_id: Option<&str>,
        list_format_id: Option<&str>,
    ) -> Result<Markup, ProcessorError> {
        let pattern = self.name_pattern(format_id)?;
        let requested = list_format_id.unwrap_or(DEFAULT_FORMAT_ID);
        let (resolved, list_format) = self.config.resolve_list_format(requested)?;
        if resolved != requested {
            debug!(requested, resolved, "unknown list format, using fallback");
        }
        Ok(list::format_list(
            items,
            &pattern,
            &list_format.spec,
            &self.settings,
            &self.config.terms,
        ))
    }

    pub fn get_setting(&self, key: &str) -> Option<String> {
        self.settings.get(key)
    }

    /// Change a setting. Only an unrecognised `markup` value is rejected.
    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<(), ProcessorError> {
        self.settings
            .set(key, value)
            .map_err(|_| ProcessorError::InvalidSetting {
                key: key.to_string(),
                value: value.to_string(),
            })
    }

    /// Conjunction options keyed by identifier.
    pub fn last_delimiter_types(
        &self,
        include_examples: bool,
    ) -> IndexMap<&'static str, &'static str> {
        Conjunction::ALL
            .iter()
            .map(|c| (c.as_str(), c.label(include_examples)))
            .collect()
    }

    /// Delimiter-precedes-last options keyed by identifier.
    pub fn last_delimiter_behaviors(
        &self,
        include_examples: bool,
    ) -> IndexMap<&'static str, &'static str> {
        DelimiterPrecedesLast::ALL
            .iter()
            .map(|b| (b.as_str(), b.label(include_examples)))
            .collect()
    }

    /// Compile, or fetch from the cache, the pattern of a name format.
    fn name_pattern(
        &self,
        format_id: Option<&str>,
    ) -> Result<Arc<FormatPattern>, ProcessorError> {
        let requested = format_id.unwrap_or(DEFAULT_FORMAT_ID);
        let (resolved, format) = self.config.resolve_name_format(requested)?;
        if resolved != requested {
            debug!(requested, resolved, "unknown name format, using fallback");
        }
        self.compiled(&format.pattern)
    }

    /// Compile a pattern through the cache.
    pub fn compiled(&self, pattern: &str) -> Result<Arc<FormatPattern>, ProcessorError> {
        if let Some(compiled) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
        {
            return Ok(Arc::clone(compiled));
        }

        trace!(pattern, "compiling name pattern");
        let compiled = Arc::new(compile(pattern)?);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(pattern.to_string())
            .or_insert_with(|| Arc::clone(&compiled));
        Ok(compiled)
    }
}
