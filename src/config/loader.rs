//! Rules loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading tax rules
//! from YAML data files.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::FilingStatus;

use super::types::{
    BracketFileConfig, DeductionsConfig, ExemptionsConfig, TaxBracket, TaxRules,
};

/// Loads and provides access to historical tax rules.
///
/// The `RulesLoader` reads YAML data files from a directory and provides
/// the three lookups the engine depends on: bracket schedules, standard
/// deductions, and personal exemptions. Lookups for years or statuses
/// absent from the data return zero defaults rather than errors; only
/// loading failures and malformed schedules are surfaced.
///
/// Reloading is done by constructing a fresh loader; the loaded rules are
/// immutable for the lifetime of the instance.
///
/// # Directory Structure
///
/// The rules directory should have the following structure:
/// ```text
/// config/ustax/
/// ├── deductions.yaml   # standard deductions by year and status
/// ├── exemptions.yaml   # personal exemptions by year
/// └── brackets/
///     └── 2020.yaml     # bracket schedules for this year
/// ```
///
/// # Example
///
/// ```no_run
/// use tax_engine::config::RulesLoader;
/// use tax_engine::models::FilingStatus;
///
/// let loader = RulesLoader::load("./config/ustax").unwrap();
///
/// let deduction = loader.get_standard_deduction(2020, FilingStatus::Single);
/// println!("2020 single standard deduction: ${}", deduction);
///
/// let brackets = loader.get_brackets(2020, FilingStatus::Single);
/// println!("2020 single schedule has {} brackets", brackets.len());
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: TaxRules,
}

impl RulesLoader {
    /// Loads tax rules from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rules directory (e.g., "./config/ustax")
    ///
    /// # Returns
    ///
    /// Returns a `RulesLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any bracket schedule is out of order, gapped, or open before its end
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tax_engine::config::RulesLoader;
    ///
    /// let loader = RulesLoader::load("./config/ustax")?;
    /// # Ok::<(), tax_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load deductions.yaml
        let deductions_path = path.join("deductions.yaml");
        let deductions = Self::load_yaml::<DeductionsConfig>(&deductions_path)?;

        // Load exemptions.yaml
        let exemptions_path = path.join("exemptions.yaml");
        let exemptions = Self::load_yaml::<ExemptionsConfig>(&exemptions_path)?;

        // Load all bracket files from the brackets directory
        let brackets_dir = path.join("brackets");
        let schedules = Self::load_brackets(&brackets_dir)?;

        let rules = TaxRules::new(deductions.years, exemptions.years, schedules);

        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all bracket files from the brackets directory.
    fn load_brackets(
        brackets_dir: &Path,
    ) -> EngineResult<BTreeMap<i32, std::collections::HashMap<FilingStatus, Vec<TaxBracket>>>>
    {
        let brackets_dir_str = brackets_dir.display().to_string();

        if !brackets_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: brackets_dir_str,
            });
        }

        let entries = fs::read_dir(brackets_dir).map_err(|_| EngineError::ConfigNotFound {
            path: brackets_dir_str.clone(),
        })?;

        let mut schedules = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: brackets_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file_config = Self::load_yaml::<BracketFileConfig>(&path)?;
                for (status, brackets) in &file_config.schedules {
                    Self::validate_schedule(&path, *status, brackets)?;
                }
                schedules.insert(file_config.year, file_config.schedules);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no bracket files found)", brackets_dir_str),
            });
        }

        Ok(schedules)
    }

    /// Validates that a bracket schedule covers [0, unbounded) without gaps.
    ///
    /// Contiguity is the repository's responsibility; the decomposition
    /// engine trusts loaded schedules. A schedule must start at 0, be sorted
    /// ascending, have each bracket's upper bound equal to the next lower
    /// bound, use rates in [0, 1], and end with an unbounded bracket so all
    /// taxable income is allocated.
    fn validate_schedule(
        path: &Path,
        status: FilingStatus,
        brackets: &[TaxBracket],
    ) -> EngineResult<()> {
        let fail = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if brackets.is_empty() {
            return Err(fail(format!("empty schedule for {:?}", status)));
        }

        if brackets[0].lower != Decimal::ZERO {
            return Err(fail(format!(
                "schedule for {:?} starts at {} instead of 0",
                status, brackets[0].lower
            )));
        }

        for (i, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(fail(format!(
                    "schedule for {:?} has rate {} outside [0, 1]",
                    status, bracket.rate
                )));
            }

            let is_last = i == brackets.len() - 1;
            match bracket.upper {
                Some(upper) => {
                    if upper <= bracket.lower {
                        return Err(fail(format!(
                            "schedule for {:?} has non-positive width at {}",
                            status, bracket.lower
                        )));
                    }
                    if is_last {
                        return Err(fail(format!(
                            "schedule for {:?} ends at {} instead of unbounded",
                            status, upper
                        )));
                    }
                    if brackets[i + 1].lower != upper {
                        return Err(fail(format!(
                            "schedule for {:?} has a gap between {} and {}",
                            status,
                            upper,
                            brackets[i + 1].lower
                        )));
                    }
                }
                None => {
                    if !is_last {
                        return Err(fail(format!(
                            "schedule for {:?} has an unbounded bracket before the end",
                            status
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Wraps rules that were constructed in memory.
    ///
    /// Useful for tests and for embedding rules without a data directory.
    /// Schedules passed here bypass the contiguity checks performed by
    /// [`load`](Self::load).
    pub fn from_rules(rules: TaxRules) -> Self {
        Self { rules }
    }

    /// Returns the underlying tax rules.
    pub fn rules(&self) -> &TaxRules {
        &self.rules
    }

    /// Gets the ordered bracket schedule for a year and filing status.
    ///
    /// Returns an empty slice when the year or status has no schedule.
    /// An empty schedule is a valid degenerate input for the engine (zero
    /// tax), not an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tax_engine::config::RulesLoader;
    /// use tax_engine::models::FilingStatus;
    ///
    /// let loader = RulesLoader::load("./config/ustax")?;
    /// let brackets = loader.get_brackets(2020, FilingStatus::Single);
    /// assert!(!brackets.is_empty());
    /// # Ok::<(), tax_engine::error::EngineError>(())
    /// ```
    pub fn get_brackets(&self, year: i32, status: FilingStatus) -> &[TaxBracket] {
        self.rules.schedule(year, status).unwrap_or(&[])
    }

    /// Gets the standard deduction for a year and filing status.
    ///
    /// Returns 0 when the year is not covered by the data. This mirrors the
    /// defensive fallback contract of the upstream rules access: a missing
    /// historical year is not a caller error.
    pub fn get_standard_deduction(&self, year: i32, status: FilingStatus) -> Decimal {
        self.rules
            .deductions(year)
            .map(|entry| entry.for_status(status))
            .unwrap_or(Decimal::ZERO)
    }

    /// Gets the personal exemption data for a year and filing status.
    ///
    /// Returns `(per_person_amount, dependent_rate, note)`, defaulting to
    /// `(0, 0, "")` when the year is not covered. Applicability of the
    /// exemption window (1913-2017) is the caller's concern, not the
    /// repository's.
    pub fn get_personal_exemption(
        &self,
        year: i32,
        status: FilingStatus,
    ) -> (Decimal, Decimal, &str) {
        match self.rules.exemptions(year) {
            Some(entry) => (entry.for_status(status), entry.dependent, entry.note.as_str()),
            None => (Decimal::ZERO, Decimal::ZERO, ""),
        }
    }
}
