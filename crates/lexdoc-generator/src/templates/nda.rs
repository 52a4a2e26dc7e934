//! Mutual non-disclosure agreement template

use super::{fill, DocumentBuilder, Slot};
use lexdoc_domain::FormValues;

pub const DISCLOSING: Slot = Slot::new("party1Name", &["disclosingParty"], "[DISCLOSING PARTY]");
pub const DISCLOSING_ADDRESS: Slot = Slot::new(
    "party1Address",
    &["disclosingPartyAddress"],
    "[DISCLOSING PARTY ADDRESS]",
);
pub const RECEIVING: Slot = Slot::new("party2Name", &["receivingParty"], "[RECEIVING PARTY]");
pub const RECEIVING_ADDRESS: Slot = Slot::new(
    "party2Address",
    &["receivingPartyAddress"],
    "[RECEIVING PARTY ADDRESS]",
);
pub const EFFECTIVE: Slot = Slot::new("date", &["effectiveDate"], "[EFFECTIVE DATE]");
pub const PURPOSE: Slot = Slot::new("purpose", &["disclosurePurpose"], "[PURPOSE OF DISCLOSURE]");
pub const DURATION: Slot = Slot::new("duration", &["confidentialityPeriod"], "[DURATION]");
pub const TERMS: Slot = Slot::new(
    "customTerms",
    &["permittedDisclosures", "specialTerms"],
    "No additional terms specified.",
);
pub const GOVERNING_LAW: Slot = Slot::new("governingLaw", &[], "[STATE/JURISDICTION]");

pub const SLOTS: &[Slot] = &[
    DISCLOSING,
    DISCLOSING_ADDRESS,
    RECEIVING,
    RECEIVING_ADDRESS,
    EFFECTIVE,
    PURPOSE,
    DURATION,
    TERMS,
    GOVERNING_LAW,
];

/// Values of a non-disclosure agreement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NdaTerms {
    pub disclosing_party: Option<String>,
    pub disclosing_address: Option<String>,
    pub receiving_party: Option<String>,
    pub receiving_address: Option<String>,
    pub effective_date: Option<String>,
    pub purpose: Option<String>,
    pub duration: Option<String>,
    pub custom_terms: Option<String>,
    pub governing_law: Option<String>,
}

impl NdaTerms {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            disclosing_party: DISCLOSING.read(values),
            disclosing_address: DISCLOSING_ADDRESS.read(values),
            receiving_party: RECEIVING.read(values),
            receiving_address: RECEIVING_ADDRESS.read(values),
            effective_date: EFFECTIVE.read(values),
            purpose: PURPOSE.read(values),
            duration: DURATION.read(values),
            custom_terms: TERMS.read(values),
            governing_law: GOVERNING_LAW.read(values),
        }
    }

    pub fn render(&self) -> String {
        let disclosing = fill(&self.disclosing_party, &DISCLOSING);
        let receiving = fill(&self.receiving_party, &RECEIVING);

        let mut doc = DocumentBuilder::new("MUTUAL NON-DISCLOSURE AGREEMENT");
        doc.paragraph(&format!(
            "This Mutual Non-Disclosure Agreement (\"Agreement\") is entered into on {}, between {} (\"Disclosing Party\"), and {} (\"Receiving Party\").",
            fill(&self.effective_date, &EFFECTIVE),
            disclosing,
            receiving
        ))
        .clause(
            "PARTIES",
            &format!(
                "Disclosing Party: {}\nAddress: {}\n\nReceiving Party: {}\nAddress: {}",
                disclosing,
                fill(&self.disclosing_address, &DISCLOSING_ADDRESS),
                receiving,
                fill(&self.receiving_address, &RECEIVING_ADDRESS)
            ),
        )
        .clause(
            "PURPOSE",
            &format!(
                "The parties wish to explore a potential business relationship and may disclose confidential information to each other in connection with the following purpose: {}.",
                fill(&self.purpose, &PURPOSE)
            ),
        )
        .clause(
            "DEFINITION OF CONFIDENTIAL INFORMATION",
            "For purposes of this Agreement, \"Confidential Information\" shall include all information or material that has or could have commercial value or other utility in the business in which Disclosing Party is engaged. Confidential Information includes, but is not limited to, technical data, trade secrets, know-how, research, product plans, products, services, customers, customer lists, markets, software, developments, inventions, processes, formulas, technology, designs, drawings, engineering, hardware configuration information, marketing, finances, or other business information.",
        )
        .clause(
            "OBLIGATIONS OF RECEIVING PARTY",
            "Receiving Party agrees to:\na) Hold and maintain the Confidential Information in strict confidence;\nb) Not disclose the Confidential Information to any third parties without prior written consent;\nc) Not use the Confidential Information for any purpose other than the purpose stated above;\nd) Take reasonable precautions to protect the confidentiality of the Confidential Information.",
        )
        .clause(
            "EXCEPTIONS",
            "The obligations of Receiving Party shall not apply to information that:\na) Is or becomes publicly available through no breach of this Agreement;\nb) Is rightfully known by Receiving Party prior to disclosure;\nc) Is rightfully received by Receiving Party from a third party without breach of any confidentiality obligation;\nd) Is required to be disclosed by law or court order.",
        )
        .clause(
            "TERM",
            &format!(
                "This Agreement shall remain in effect for {} from the date first written above, unless terminated earlier by mutual written consent of the parties.",
                fill(&self.duration, &DURATION)
            ),
        )
        .clause(
            "RETURN OF MATERIALS",
            "All documents, materials, and other tangible expressions of Confidential Information shall be returned to Disclosing Party immediately upon request or upon termination of this Agreement.",
        )
        .clause(
            "REMEDIES",
            "Receiving Party acknowledges that disclosure of Confidential Information would cause irreparable harm to Disclosing Party for which monetary damages would be inadequate. Disclosing Party shall be entitled to seek equitable relief, including injunction and specific performance, in addition to all other remedies available at law or in equity.",
        )
        .clause("SPECIAL TERMS", fill(&self.custom_terms, &TERMS))
        .clause(
            "GOVERNING LAW",
            &format!(
                "This Agreement shall be governed by and construed in accordance with the laws of {}.",
                fill(&self.governing_law, &GOVERNING_LAW)
            ),
        )
        .clause(
            "ENTIRE AGREEMENT",
            "This Agreement constitutes the entire agreement between the parties concerning the subject matter hereof and supersedes all prior agreements and understandings.",
        )
        .signatures(&[("DISCLOSING PARTY", disclosing), ("RECEIVING PARTY", receiving)]);
        doc.finish()
    }
}
