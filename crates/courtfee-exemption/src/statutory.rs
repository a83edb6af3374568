//! # Statutory Exemption Catalog
//!
//! Categories granted by the tax code. The `fixed` categories waive up to
//! 25 000 ₽ of the fee; pensioners suing the social fund pay nothing.

use courtfee_core::{ConfigurationError, CourtType, ExemptionId};

use crate::catalog::ExemptionCatalog;
use crate::category::{DiscountRule, ExemptionCategory};

const LIMITED_RELIEF: DiscountRule = DiscountRule::Fixed { amount: 25_000.0 };

/// The built-in exemption catalog.
pub fn statutory_catalog() -> Result<ExemptionCatalog, ConfigurationError> {
    ExemptionCatalog::new(vec![
        ExemptionCategory {
            id: ExemptionId::from("disabled_1_2"),
            name: "Инвалиды I и II группы".to_string(),
            description: "Истцы и административные истцы — инвалиды I или II группы".to_string(),
            discount: LIMITED_RELIEF,
            applicable_courts: vec![CourtType::General, CourtType::Arbitration],
            legal_basis: "пп. 2 п. 2 ст. 333.36, пп. 2 п. 1 ст. 333.37 НК РФ".to_string(),
        },
        ExemptionCategory {
            id: ExemptionId::from("veterans"),
            name: "Ветераны боевых действий".to_string(),
            description: "Ветераны боевых действий и ветераны военной службы".to_string(),
            discount: LIMITED_RELIEF,
            applicable_courts: vec![CourtType::General, CourtType::Arbitration],
            legal_basis: "пп. 3 п. 2 ст. 333.36, пп. 11 п. 1 ст. 333.37 НК РФ".to_string(),
        },
        ExemptionCategory {
            id: ExemptionId::from("consumer_protection"),
            name: "Защита прав потребителей".to_string(),
            description: "Истцы по искам, связанным с нарушением прав потребителей".to_string(),
            discount: LIMITED_RELIEF,
            applicable_courts: vec![CourtType::General],
            legal_basis: "п. 3 ст. 333.36 НК РФ".to_string(),
        },
        ExemptionCategory {
            id: ExemptionId::from("pensioners"),
            name: "Пенсионеры".to_string(),
            description: "Пенсионеры по искам к Социальному фонду России".to_string(),
            discount: DiscountRule::Exempt,
            applicable_courts: vec![CourtType::General],
            legal_basis: "пп. 5 п. 2 ст. 333.36 НК РФ".to_string(),
        },
    ])
}
