//! Static field schemas per document type
//!
//! Two lookups exist: a short "basic" form for one-off drafts, and the full
//! "detailed" structure that stands in for analysis of a sample document.

use lexdoc_domain::{DocumentType, FieldKind, FieldSpec};
use serde::Serialize;

/// Field schema derived for a document type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedSchema {
    /// Document type the schema belongs to
    pub document_type: DocumentType,

    /// Form fields in display order
    pub fields: Vec<FieldSpec>,

    /// Clause topics recognized in the sample (empty for content scans)
    pub clauses: Vec<String>,

    /// Whether the fields came from scanning the sample text itself
    pub from_content: bool,
}

use FieldKind::{Date, Text, Textarea};

fn req(name: &str, label: &str, kind: FieldKind) -> FieldSpec {
    FieldSpec::required(name, label, kind)
}

fn opt(name: &str, label: &str, kind: FieldKind) -> FieldSpec {
    FieldSpec::optional(name, label, kind)
}

/// Short form used when drafting without a sample document
pub fn basic_fields(document_type: DocumentType) -> Vec<FieldSpec> {
    match document_type {
        DocumentType::Rental => vec![
            req("landlordName", "Landlord Name", Text),
            req("tenantName", "Tenant Name", Text),
            req("propertyAddress", "Property Address", Text),
            req("monthlyRent", "Monthly Rent Amount", Text),
            req("leaseStartDate", "Lease Start Date", Date),
            req("leaseDuration", "Lease Duration", Text),
        ],
        DocumentType::Nda => vec![
            req("disclosingParty", "Disclosing Party", Text),
            req("receivingParty", "Receiving Party", Text),
            req("effectiveDate", "Effective Date", Date),
            req("duration", "Agreement Duration", Text),
        ],
        DocumentType::Service => vec![
            req("serviceProvider", "Service Provider", Text),
            req("client", "Client Name", Text),
            req("serviceDescription", "Service Description", Textarea),
            req("projectFee", "Project Fee", Text),
            req("projectDuration", "Project Duration", Text),
        ],
        DocumentType::Employment => vec![
            req("employerName", "Employer Name", Text),
            req("employeeName", "Employee Name", Text),
            req("jobTitle", "Job Title", Text),
            req("salary", "Salary", Text),
            req("startDate", "Start Date", Date),
        ],
        DocumentType::Purchase => vec![
            req("sellerName", "Seller Name", Text),
            req("buyerName", "Buyer Name", Text),
            req("itemDescription", "Item Description", Textarea),
            req("purchasePrice", "Purchase Price", Text),
            req("closingDate", "Closing Date", Date),
        ],
    }
}

/// Full structure produced by analyzing a sample document of the given type
pub fn detailed_schema(document_type: DocumentType) -> ExtractedSchema {
    let (fields, clauses): (Vec<FieldSpec>, &[&str]) = match document_type {
        DocumentType::Rental => (
            vec![
                req("landlordName", "Landlord Full Name", Text),
                req("landlordAddress", "Landlord Address", Text),
                req("tenantName", "Tenant Full Name", Text),
                req("tenantAddress", "Tenant Address", Text),
                req("propertyAddress", "Rental Property Address", Text),
                req("monthlyRent", "Monthly Rent Amount", Text),
                req("securityDeposit", "Security Deposit", Text),
                req("leaseStartDate", "Lease Start Date", Date),
                req("leaseEndDate", "Lease End Date", Date),
                opt("utilitiesIncluded", "Utilities Included", Text),
                opt("petPolicy", "Pet Policy", Text),
                opt("specialTerms", "Special Terms & Conditions", Textarea),
            ],
            &[
                "rent payment terms",
                "security deposit conditions",
                "maintenance responsibilities",
                "termination clauses",
            ],
        ),
        DocumentType::Nda => (
            vec![
                req("disclosingParty", "Disclosing Party Name", Text),
                req("disclosingPartyAddress", "Disclosing Party Address", Text),
                req("receivingParty", "Receiving Party Name", Text),
                req("receivingPartyAddress", "Receiving Party Address", Text),
                req("effectiveDate", "Effective Date", Date),
                req("disclosurePurpose", "Purpose of Disclosure", Textarea),
                req("confidentialityPeriod", "Confidentiality Period", Text),
                opt("permittedDisclosures", "Permitted Disclosures", Textarea),
            ],
            &[
                "confidentiality obligations",
                "permitted disclosures",
                "return of materials",
                "remedies for breach",
            ],
        ),
        DocumentType::Service => (
            vec![
                req("serviceProvider", "Service Provider Name", Text),
                req("serviceProviderAddress", "Service Provider Address", Text),
                req("clientName", "Client Name", Text),
                req("clientAddress", "Client Address", Text),
                req("serviceDescription", "Detailed Service Description", Textarea),
                req("projectFee", "Total Project Fee", Text),
                req("paymentSchedule", "Payment Schedule", Text),
                req("projectStartDate", "Project Start Date", Date),
                req("projectEndDate", "Expected Completion Date", Date),
                req("deliverables", "Key Deliverables", Textarea),
            ],
            &[
                "scope of work",
                "payment terms",
                "intellectual property rights",
                "termination conditions",
            ],
        ),
        DocumentType::Employment => (
            vec![
                req("employerName", "Employer/Company Name", Text),
                req("employerAddress", "Employer Address", Text),
                req("employeeName", "Employee Full Name", Text),
                req("employeeAddress", "Employee Address", Text),
                req("jobTitle", "Job Title/Position", Text),
                req("salary", "Salary/Compensation", Text),
                req("startDate", "Employment Start Date", Date),
                req("workSchedule", "Work Schedule", Text),
                opt("benefits", "Benefits Package", Textarea),
                opt("terminationClause", "Termination Conditions", Textarea),
            ],
            &["compensation", "duties", "benefits", "termination", "confidentiality"],
        ),
        DocumentType::Purchase => (
            vec![
                req("sellerName", "Seller Full Name", Text),
                req("sellerAddress", "Seller Address", Text),
                req("buyerName", "Buyer Full Name", Text),
                req("buyerAddress", "Buyer Address", Text),
                req("itemDescription", "Item/Property Description", Textarea),
                req("purchasePrice", "Purchase Price", Text),
                opt("downPayment", "Down Payment", Text),
                req("closingDate", "Closing/Delivery Date", Date),
                opt("inspectionPeriod", "Inspection Period", Text),
                opt("financing", "Financing Details", Text),
                opt("warranties", "Warranties & Guarantees", Textarea),
                opt("specialConditions", "Special Conditions & Terms", Textarea),
            ],
            &[
                "purchase terms",
                "payment conditions",
                "delivery terms",
                "warranties",
                "inspection rights",
            ],
        ),
    };

    ExtractedSchema {
        document_type,
        fields: fields.into_iter().map(|mut f| {
            f.ai_extracted = true;
            f
        }).collect(),
        clauses: clauses.iter().map(|c| c.to_string()).collect(),
        from_content: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_type_has_required_basic_fields() {
        for doc_type in DocumentType::ALL {
            let fields = basic_fields(doc_type);
            assert!(!fields.is_empty());
            assert!(fields.iter().all(|f| f.required && !f.ai_extracted));
        }
    }

    #[test]
    fn test_detailed_fields_are_marked_extracted() {
        for doc_type in DocumentType::ALL {
            let schema = detailed_schema(doc_type);
            assert_eq!(schema.document_type, doc_type);
            assert!(!schema.from_content);
            assert!(!schema.clauses.is_empty());
            assert!(schema.fields.iter().all(|f| f.ai_extracted));
        }
    }

    #[test]
    fn test_field_names_are_unique() {
        for doc_type in DocumentType::ALL {
            let schema = detailed_schema(doc_type);
            let names: HashSet<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names.len(), schema.fields.len(), "{} has duplicate fields", doc_type);
        }
    }
}
