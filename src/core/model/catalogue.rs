use crate::core::actions::render_band::ports::escape_time_formula::EscapeTimeFormula;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::fractals::kinds::FormulaKind;
use crate::core::model::errors::ConfigurationError;
use std::collections::HashSet;
use std::sync::Arc;

/// The formulas and colour maps a model may select from.
///
/// Built once and shared; never mutated after construction. Both lists are
/// non-empty and names are unique ignoring case.
#[derive(Debug, Clone)]
pub struct Catalogue {
    formulas: Vec<Arc<dyn EscapeTimeFormula>>,
    colour_maps: Vec<Arc<ColourMap>>,
}

impl Catalogue {
    pub fn new(
        formulas: Vec<Arc<dyn EscapeTimeFormula>>,
        colour_maps: Vec<Arc<ColourMap>>,
    ) -> Result<Self, ConfigurationError> {
        if formulas.is_empty() || colour_maps.is_empty() {
            return Err(ConfigurationError::EmptyCatalogue);
        }

        check_unique(formulas.iter().map(|f| f.name()))?;
        check_unique(colour_maps.iter().map(|m| m.name()))?;

        Ok(Self {
            formulas,
            colour_maps,
        })
    }

    /// Every built-in formula and colour map, defaults first.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            formulas: FormulaKind::ALL
                .iter()
                .map(|&kind| Arc::new(kind) as Arc<dyn EscapeTimeFormula>)
                .collect(),
            colour_maps: ColourMapKind::ALL
                .iter()
                .map(|&kind| Arc::new(colour_map_factory(kind)))
                .collect(),
        }
    }

    #[must_use]
    pub fn formulas(&self) -> &[Arc<dyn EscapeTimeFormula>] {
        &self.formulas
    }

    #[must_use]
    pub fn colour_maps(&self) -> &[Arc<ColourMap>] {
        &self.colour_maps
    }

    #[must_use]
    pub fn default_formula(&self) -> &Arc<dyn EscapeTimeFormula> {
        &self.formulas[0]
    }

    #[must_use]
    pub fn default_colour_map(&self) -> &Arc<ColourMap> {
        &self.colour_maps[0]
    }

    pub fn formula(&self, name: &str) -> Result<&Arc<dyn EscapeTimeFormula>, ConfigurationError> {
        self.formulas
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigurationError::UnknownFormula {
                name: name.to_owned(),
            })
    }

    pub fn colour_map(&self, name: &str) -> Result<&Arc<ColourMap>, ConfigurationError> {
        self.colour_maps
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigurationError::UnknownColourMap {
                name: name.to_owned(),
            })
    }

    /// `(name, equation)` for every formula, in registration order.
    pub fn formula_equations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.formulas.iter().map(|f| (f.name(), f.equation()))
    }

    pub fn colour_map_names(&self) -> impl Iterator<Item = &str> {
        self.colour_maps.iter().map(|m| m.name())
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_unique<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();

    for name in names {
        if !seen.insert(name.to_lowercase()) {
            return Err(ConfigurationError::DuplicateName {
                name: name.to_owned(),
            });
        }
    }

    Ok(())
}
