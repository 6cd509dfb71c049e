//! Canonical document types, their prompt templates, and the synonym table
//! used to resolve free-form labels from forms and API callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PromptTemplate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocType {
    RentalAgreement,
    EmploymentContract,
    PartnershipAgreement,
    Nda,
}

const RENTAL_TEMPLATE: &str = "Generate a comprehensive residential rental agreement between \
{{party1}} (tenant) and {{party2}} (landlord) for a term of {{duration}} months. Include: \
premises, term, rent, security deposit, utilities, maintenance, tenant obligations, landlord \
obligations, default, termination, governing law, and signature blocks. Write in clear legal \
language.";

const EMPLOYMENT_TEMPLATE: &str = "Draft an employment contract between {{party2}} (employer) \
and {{party1}} (employee) with an annual salary of {{salary}}. Include: position, duties, \
compensation, benefits, working hours, probation, confidentiality, IP assignment, non-compete \
(if appropriate), termination, severance, and governing law.";

const PARTNERSHIP_TEMPLATE: &str = "Draft a business partnership agreement between {{party1}} \
and {{party2}}. Include: contributions, ownership percentages, management and decision-making, \
profit/loss allocation, withdrawals/distributions, dispute resolution, admission/withdrawal of \
partners, dissolution, and governing law.";

const NDA_TEMPLATE: &str = "Generate a mutual non-disclosure agreement between {{party1}} and \
{{party2}} to protect confidential information. Include: definitions, obligations, exclusions, \
term, permitted disclosures, remedies, and governing law.";

/// Lowercase synonyms accepted in place of a canonical key.
pub const ALIASES: &[(&str, DocType)] = &[
    ("rental agreement", DocType::RentalAgreement),
    ("rental", DocType::RentalAgreement),
    ("lease", DocType::RentalAgreement),
    ("employment contract", DocType::EmploymentContract),
    ("employment", DocType::EmploymentContract),
    ("job", DocType::EmploymentContract),
    ("business partnership agreement", DocType::PartnershipAgreement),
    ("partnership", DocType::PartnershipAgreement),
    ("bpa", DocType::PartnershipAgreement),
    ("nda", DocType::Nda),
    ("non-disclosure", DocType::Nda),
];

impl DocType {
    pub const ALL: [DocType; 4] = [
        DocType::RentalAgreement,
        DocType::EmploymentContract,
        DocType::PartnershipAgreement,
        DocType::Nda,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DocType::RentalAgreement => "rental-agreement",
            DocType::EmploymentContract => "employment-contract",
            DocType::PartnershipAgreement => "partnership-agreement",
            DocType::Nda => "nda",
        }
    }

    /// Label shown on the drafting form.
    pub fn label(self) -> &'static str {
        match self {
            DocType::RentalAgreement => "Rental Agreement",
            DocType::EmploymentContract => "Employment Contract",
            DocType::PartnershipAgreement => "Business Partnership Agreement",
            DocType::Nda => "NDA",
        }
    }

    pub fn from_key(key: &str) -> Option<DocType> {
        DocType::ALL.into_iter().find(|doc_type| doc_type.key() == key)
    }

    pub fn template(self) -> PromptTemplate {
        let text = match self {
            DocType::RentalAgreement => RENTAL_TEMPLATE,
            DocType::EmploymentContract => EMPLOYMENT_TEMPLATE,
            DocType::PartnershipAgreement => PARTNERSHIP_TEMPLATE,
            DocType::Nda => NDA_TEMPLATE,
        };
        PromptTemplate::new(text)
    }

    /// Whether the template consumes the `duration` field.
    pub fn uses_duration(self) -> bool {
        matches!(self, DocType::RentalAgreement)
    }

    /// Whether the template consumes the `salary` field.
    pub fn uses_salary(self) -> bool {
        matches!(self, DocType::EmploymentContract)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolves a free-form document type. The alias table is consulted first,
/// then the canonical keys.
pub fn normalize(raw: &str) -> Option<DocType> {
    let key = raw.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, doc_type)| *doc_type)
        .or_else(|| DocType::from_key(&key))
}

pub fn template(doc_type: DocType) -> PromptTemplate {
    doc_type.template()
}
