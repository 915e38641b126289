use crate::core::Taxable;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::validate_range;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIMPLE_RATE: f64 = 15.0;
pub const DEFAULT_MIDDLE_RATE: f64 = 25.0;
pub const DEFAULT_UPPER_RATE: f64 = 35.0;

/// The three tier rates, injected into the registry as plain configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicy {
    simple_rate: f64,
    middle_rate: f64,
    upper_rate: f64,
}

impl TaxPolicy {
    pub fn new(simple_rate: f64, middle_rate: f64, upper_rate: f64) -> Result<Self> {
        let policy = Self {
            simple_rate,
            middle_rate,
            upper_rate,
        };
        policy.check_rates()?;
        Ok(policy)
    }

    fn check_rates(&self) -> Result<()> {
        for (field, rate) in [
            ("tax.simple_rate", self.simple_rate),
            ("tax.middle_rate", self.middle_rate),
            ("tax.upper_rate", self.upper_rate),
        ] {
            validate_range(field, rate, 0.0, 100.0).map_err(|e| RegistryError::ConfigError {
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            simple_rate: DEFAULT_SIMPLE_RATE,
            middle_rate: DEFAULT_MIDDLE_RATE,
            upper_rate: DEFAULT_UPPER_RATE,
        }
    }
}

impl Taxable for TaxPolicy {
    fn simple_tax_rate(&self) -> f64 {
        self.simple_rate
    }

    fn middle_tax_rate(&self) -> f64 {
        self.middle_rate
    }

    fn upper_tax_rate(&self) -> f64 {
        self.upper_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Experience;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_rates() {
        let policy = TaxPolicy::default();
        assert_eq!(policy.simple_tax_rate(), 15.0);
        assert_eq!(policy.middle_tax_rate(), 25.0);
        assert_eq!(policy.upper_tax_rate(), 35.0);
    }

    #[test]
    fn test_net_salary_per_tier() {
        let policy = TaxPolicy::default();
        assert!(approx_eq(policy.net_salary(1000.0, Experience::Junior), 850.0));
        assert!(approx_eq(policy.net_salary(1000.0, Experience::Mid), 750.0));
        assert!(approx_eq(policy.net_salary(1000.0, Experience::Senior), 650.0));
        assert!(approx_eq(policy.net_salary(0.0, Experience::Senior), 0.0));
    }

    #[test]
    fn test_rate_boundaries() {
        let policy = TaxPolicy::new(0.0, 50.0, 100.0).unwrap();
        assert!(approx_eq(policy.net_salary(400.0, Experience::Junior), 400.0));
        assert!(approx_eq(policy.net_salary(400.0, Experience::Mid), 200.0));
        assert!(approx_eq(policy.net_salary(400.0, Experience::Senior), 0.0));
    }

    #[test]
    fn test_net_salary_stays_finite_for_huge_gross() {
        let policy = TaxPolicy::default();
        let net = policy.net_salary(1.0e307, Experience::Senior);
        assert!(net.is_finite());
        assert!((net / 1.0e307 - 0.65).abs() < 1e-12);

        let net = policy.net_salary(f64::MAX, Experience::Junior);
        assert!(net.is_finite());
        assert!(net < f64::MAX);
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        assert!(matches!(
            TaxPolicy::new(-1.0, 25.0, 35.0),
            Err(RegistryError::ConfigError { .. })
        ));
        assert!(TaxPolicy::new(15.0, 101.0, 35.0).is_err());
        assert!(TaxPolicy::new(15.0, 25.0, f64::NAN).is_err());
    }
}
