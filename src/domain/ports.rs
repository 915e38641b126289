use crate::core::tax::TaxPolicy;
use crate::domain::model::Experience;
use crate::utils::error::Result;

/// Named tax rates, each a percentage in `[0, 100]`.
pub trait Taxable: Send + Sync {
    fn simple_tax_rate(&self) -> f64;
    fn middle_tax_rate(&self) -> f64;
    fn upper_tax_rate(&self) -> f64;

    fn rate_for(&self, experience: Experience) -> f64 {
        match experience {
            Experience::Junior => self.simple_tax_rate(),
            Experience::Mid => self.middle_tax_rate(),
            Experience::Senior => self.upper_tax_rate(),
        }
    }

    /// Gross salary minus the tier's percentage deduction.
    ///
    /// Scales by the retained fraction so the product never exceeds the gross
    /// amount; any finite gross stays finite.
    fn net_salary(&self, gross_salary: f64, experience: Experience) -> f64 {
        gross_salary * (1.0 - self.rate_for(experience) / 100.0)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn context_path(&self) -> &str;
    fn tax_policy(&self) -> Result<TaxPolicy>;
}
