//! Residential lease template

use super::{fill, money, DocumentBuilder, Slot};
use crate::dates::lease_end_date;
use lexdoc_domain::FormValues;

pub const LANDLORD: Slot = Slot::new("party1Name", &["landlordName"], "[LANDLORD NAME]");
pub const LANDLORD_ADDRESS: Slot =
    Slot::new("party1Address", &["landlordAddress"], "[LANDLORD ADDRESS]");
pub const TENANT: Slot = Slot::new("party2Name", &["tenantName"], "[TENANT NAME]");
pub const TENANT_ADDRESS: Slot = Slot::new("party2Address", &["tenantAddress"], "[TENANT ADDRESS]");
pub const PROPERTY: Slot = Slot::new("propertyAddress", &[], "[PROPERTY ADDRESS]");
pub const RENT: Slot = Slot::new("amount", &["monthlyRent"], "[AMOUNT]");
pub const DEPOSIT: Slot = Slot::new("securityDeposit", &[], "[SECURITY DEPOSIT]");
pub const START: Slot = Slot::new("date", &["leaseStartDate"], "[START DATE]");
pub const DURATION: Slot = Slot::new("duration", &["leaseDuration"], "[DURATION]");
pub const END: Slot = Slot::new("leaseEndDate", &[], crate::dates::END_DATE_PLACEHOLDER);
pub const UTILITIES: Slot = Slot::new(
    "utilitiesIncluded",
    &[],
    "Tenant shall be responsible for arranging for and paying all utilities and services supplied to the Premises, including but not limited to gas, electricity, water, sewer, telephone, cable television, and internet services.",
);
pub const PETS: Slot = Slot::new(
    "petPolicy",
    &[],
    "No animals, birds, or pets of any kind shall be brought on the Premises without the prior written consent of Landlord. If consent is given, Tenant agrees to pay an additional security deposit and monthly pet fee as determined by Landlord.",
);
pub const TERMS: Slot = Slot::new("customTerms", &["specialTerms"], "No additional terms specified.");

pub const SLOTS: &[Slot] = &[
    LANDLORD,
    LANDLORD_ADDRESS,
    TENANT,
    TENANT_ADDRESS,
    PROPERTY,
    RENT,
    DEPOSIT,
    START,
    DURATION,
    END,
    UTILITIES,
    PETS,
    TERMS,
];

/// Values of a residential lease
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalTerms {
    pub landlord: Option<String>,
    pub landlord_address: Option<String>,
    pub tenant: Option<String>,
    pub tenant_address: Option<String>,
    pub property: Option<String>,
    pub rent: Option<String>,
    pub security_deposit: Option<String>,
    pub start_date: Option<String>,
    pub duration: Option<String>,
    pub end_date: Option<String>,
    pub utilities: Option<String>,
    pub pet_policy: Option<String>,
    pub custom_terms: Option<String>,
}

impl RentalTerms {
    /// Read the lease from form values, applying cross-field defaults
    pub fn from_values(values: &FormValues) -> Self {
        let rent = RENT.read(values);
        let custom_terms = TERMS.read(values);

        Self {
            landlord: LANDLORD.read(values),
            landlord_address: LANDLORD_ADDRESS.read(values),
            tenant: TENANT.read(values),
            tenant_address: TENANT_ADDRESS.read(values),
            property: PROPERTY.read(values),
            security_deposit: DEPOSIT.read(values).or_else(|| rent.clone()),
            rent,
            start_date: START.read(values),
            duration: DURATION.read(values),
            end_date: END.read(values),
            utilities: UTILITIES
                .read(values)
                .or_else(|| custom_terms.as_deref().and_then(utilities_from_terms)),
            pet_policy: PETS
                .read(values)
                .or_else(|| custom_terms.as_deref().and_then(pet_policy_from_terms)),
            custom_terms,
        }
    }

    /// Supplied end date, else start date plus duration
    pub fn end_date(&self) -> String {
        match (&self.end_date, &self.start_date, &self.duration) {
            (Some(end), _, _) => end.clone(),
            (None, Some(start), Some(duration)) => lease_end_date(start, duration),
            _ => END.fallback.to_string(),
        }
    }

    pub fn render(&self) -> String {
        let landlord = fill(&self.landlord, &LANDLORD);
        let tenant = fill(&self.tenant, &TENANT);
        let start = fill(&self.start_date, &START);
        let rent = money(&self.rent, &RENT);
        let deposit = money(&self.security_deposit, &DEPOSIT);

        let utilities = match &self.utilities {
            Some(provided) => format!(
                "Landlord shall provide and pay for: {}. Tenant shall be responsible for arranging and paying for all other utilities and services supplied to the Premises, including but not limited to gas, electricity, telephone, cable television, and internet services.",
                provided
            ),
            None => UTILITIES.fallback.to_string(),
        };

        let mut doc = DocumentBuilder::new("RESIDENTIAL LEASE AGREEMENT");
        doc.paragraph(&format!(
            "This Residential Lease Agreement (\"Agreement\") is entered into on {}, between {}, an individual (\"Landlord\"), and {}, an individual (\"Tenant\").",
            start, landlord, tenant
        ))
        .clause(
            "PARTIES",
            &format!(
                "Landlord: {}\nAddress: {}\n\nTenant: {}\nAddress: {}",
                landlord,
                fill(&self.landlord_address, &LANDLORD_ADDRESS),
                tenant,
                fill(&self.tenant_address, &TENANT_ADDRESS)
            ),
        )
        .clause(
            "PREMISES",
            &format!(
                "Landlord hereby leases to Tenant and Tenant hereby leases from Landlord the premises located at {} (the \"Premises\"). The Premises shall be used and occupied by Tenant exclusively as a private single-family residence.",
                fill(&self.property, &PROPERTY)
            ),
        )
        .clause(
            "TERM",
            &format!(
                "The term of this Agreement shall be for {}, commencing on {} and ending on {}, unless sooner terminated in accordance with the terms hereof.",
                fill(&self.duration, &DURATION),
                start,
                self.end_date()
            ),
        )
        .clause(
            "RENT",
            &format!(
                "Tenant agrees to pay Landlord rent in the amount of {} per month, due and payable in advance on the first day of each month. Rent shall be paid to Landlord at the address specified above or such other place as Landlord may designate in writing.",
                rent
            ),
        )
        .clause(
            "SECURITY DEPOSIT",
            &format!(
                "Upon execution of this Agreement, Tenant shall deposit with Landlord the sum of {} as a security deposit to secure Tenant's faithful performance of the terms of this lease. The security deposit shall be returned to Tenant within thirty (30) days after termination of this lease, less any amounts withheld by Landlord for unpaid rent, cleaning costs, or damages beyond normal wear and tear.",
                deposit
            ),
        )
        .clause(
            "USE OF PREMISES",
            "The Premises shall be used exclusively as a private dwelling for Tenant and Tenant's immediate family. No part of the Premises shall be used for any business, profession, or trade of any kind, or for any purpose other than as a private dwelling.",
        )
        .clause(
            "MAINTENANCE AND REPAIRS",
            "Tenant acknowledges that the Premises are in good order and repair. Tenant shall, at Tenant's own expense, keep and maintain the Premises in good condition and repair. Landlord shall be responsible for major structural repairs and maintenance of mechanical systems.",
        )
        .clause("UTILITIES", &utilities)
        .clause("PETS", fill(&self.pet_policy, &PETS))
        .clause(
            "ALTERATIONS",
            "Tenant shall make no alterations to the Premises without the prior written consent of Landlord. Any alterations made by Tenant shall become the property of Landlord upon termination of this lease.",
        )
        .clause(
            "ENTRY BY LANDLORD",
            "Landlord may enter the Premises at reasonable times to inspect the property, make necessary repairs, or show the property to prospective tenants or buyers, provided that Landlord gives Tenant at least 24 hours' prior notice.",
        )
        .clause(
            "TERMINATION",
            "This lease may be terminated by either party upon thirty (30) days' written notice to the other party. Upon termination, Tenant shall surrender the Premises in good condition, reasonable wear and tear excepted.",
        )
        .clause("SPECIAL TERMS AND CONDITIONS", fill(&self.custom_terms, &TERMS))
        .clause(
            "GOVERNING LAW",
            "This Agreement shall be governed by and construed in accordance with the laws of the State where the Premises are located.",
        )
        .clause(
            "ENTIRE AGREEMENT",
            "This Agreement constitutes the entire agreement between the parties and supersedes all prior negotiations, representations, or agreements relating to the subject matter hereof.",
        )
        .signatures(&[("LANDLORD", landlord), ("TENANT", tenant)]);
        doc.finish()
    }
}

/// Utilities the landlord covers, inferred from free-text terms
pub fn utilities_from_terms(terms: &str) -> Option<String> {
    let lower = terms.to_lowercase();
    if lower.contains("water") && lower.contains("sewer") {
        Some("Water and Sewer".to_string())
    } else if lower.contains("utilities") {
        Some("As specified in special terms".to_string())
    } else {
        None
    }
}

/// Free-text terms reused as the pet clause when they mention animals
pub fn pet_policy_from_terms(terms: &str) -> Option<String> {
    let lower = terms.to_lowercase();
    if lower.contains("pet") || lower.contains("animal") {
        Some(terms.to_string())
    } else {
        None
    }
}
