//! Professional service agreement template

use super::{fill, money, DocumentBuilder, Slot};
use lexdoc_domain::FormValues;

pub const PROVIDER: Slot = Slot::new("party1Name", &["serviceProvider"], "[SERVICE PROVIDER]");
pub const PROVIDER_ADDRESS: Slot = Slot::new(
    "party1Address",
    &["serviceProviderAddress"],
    "[SERVICE PROVIDER ADDRESS]",
);
pub const CLIENT: Slot = Slot::new("party2Name", &["clientName", "client"], "[CLIENT]");
pub const CLIENT_ADDRESS: Slot = Slot::new("party2Address", &["clientAddress"], "[CLIENT ADDRESS]");
pub const DESCRIPTION: Slot = Slot::new(
    "serviceDescription",
    &[],
    "[SERVICE DESCRIPTION]",
);
pub const FEE: Slot = Slot::new("amount", &["projectFee"], "[AMOUNT]");
pub const SCHEDULE: Slot = Slot::new("paymentSchedule", &[], "[PAYMENT SCHEDULE]");
pub const START: Slot = Slot::new("date", &["projectStartDate"], "[START DATE]");
pub const DURATION: Slot = Slot::new("duration", &["projectDuration"], "[DURATION]");
pub const COMPLETION: Slot = Slot::new("projectEndDate", &[], "[COMPLETION DATE]");
pub const DELIVERABLES: Slot = Slot::new("deliverables", &[], "[DELIVERABLES]");
pub const TERMS: Slot = Slot::new("customTerms", &["specialTerms"], "No additional terms specified.");
pub const GOVERNING_LAW: Slot = Slot::new("governingLaw", &[], "[STATE/JURISDICTION]");

pub const SLOTS: &[Slot] = &[
    PROVIDER,
    PROVIDER_ADDRESS,
    CLIENT,
    CLIENT_ADDRESS,
    DESCRIPTION,
    FEE,
    SCHEDULE,
    START,
    DURATION,
    COMPLETION,
    DELIVERABLES,
    TERMS,
    GOVERNING_LAW,
];

/// Values of a service agreement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceTerms {
    pub provider: Option<String>,
    pub provider_address: Option<String>,
    pub client: Option<String>,
    pub client_address: Option<String>,
    pub description: Option<String>,
    pub fee: Option<String>,
    pub payment_schedule: Option<String>,
    pub start_date: Option<String>,
    pub duration: Option<String>,
    pub completion_date: Option<String>,
    pub deliverables: Option<String>,
    pub custom_terms: Option<String>,
    pub governing_law: Option<String>,
}

impl ServiceTerms {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            provider: PROVIDER.read(values),
            provider_address: PROVIDER_ADDRESS.read(values),
            client: CLIENT.read(values),
            client_address: CLIENT_ADDRESS.read(values),
            description: DESCRIPTION.read(values),
            fee: FEE.read(values),
            payment_schedule: SCHEDULE.read(values),
            start_date: START.read(values),
            duration: DURATION.read(values),
            completion_date: COMPLETION.read(values),
            deliverables: DELIVERABLES.read(values),
            custom_terms: TERMS.read(values),
            governing_law: GOVERNING_LAW.read(values),
        }
    }

    pub fn render(&self) -> String {
        let provider = fill(&self.provider, &PROVIDER);
        let client = fill(&self.client, &CLIENT);
        let start = fill(&self.start_date, &START);

        let mut doc = DocumentBuilder::new("PROFESSIONAL SERVICE AGREEMENT");
        doc.paragraph(&format!(
            "This Professional Service Agreement (\"Agreement\") is entered into on {}, between {} (\"Service Provider\"), and {} (\"Client\").",
            start, provider, client
        ))
        .clause(
            "PARTIES",
            &format!(
                "Service Provider: {}\nAddress: {}\n\nClient: {}\nAddress: {}",
                provider,
                fill(&self.provider_address, &PROVIDER_ADDRESS),
                client,
                fill(&self.client_address, &CLIENT_ADDRESS)
            ),
        )
        .clause(
            "SERVICES",
            &format!(
                "Service Provider agrees to provide the following professional services: {}. Any change to the scope of services shall be agreed upon by the parties in writing.",
                fill(&self.description, &DESCRIPTION)
            ),
        )
        .clause(
            "COMPENSATION",
            &format!(
                "In consideration for the services provided, Client agrees to pay Service Provider the total amount of {}, payable as follows: {}.\na) Payment shall be made within thirty (30) days of receipt of invoice;\nb) Late payments may incur a service charge of 1.5% per month;\nc) All expenses must be pre-approved by Client in writing.",
                money(&self.fee, &FEE),
                fill(&self.payment_schedule, &SCHEDULE)
            ),
        )
        .clause(
            "TERM AND TERMINATION",
            &format!(
                "This Agreement shall commence on {} and continue for {}, with expected completion on {}, unless terminated earlier in accordance with the provisions herein. Either party may terminate this Agreement with thirty (30) days written notice to the other party.",
                start,
                fill(&self.duration, &DURATION),
                fill(&self.completion_date, &COMPLETION)
            ),
        )
        .clause(
            "DELIVERABLES AND PERFORMANCE",
            &format!(
                "Service Provider shall deliver the following: {}. All deliverables shall be of professional quality and meet industry standards.",
                fill(&self.deliverables, &DELIVERABLES)
            ),
        )
        .clause(
            "INTELLECTUAL PROPERTY",
            "All work products, including but not limited to documents, designs, software, and other materials created by Service Provider in the course of providing services shall become the property of Client upon full payment of all fees due.",
        )
        .clause(
            "CONFIDENTIALITY",
            "Service Provider acknowledges that during the course of providing services, Service Provider may have access to confidential information belonging to Client. Service Provider agrees to maintain the confidentiality of such information and not disclose it to any third parties.",
        )
        .clause(
            "INDEPENDENT CONTRACTOR",
            "Service Provider is an independent contractor and not an employee of Client. Service Provider shall be responsible for all taxes, insurance, and other obligations related to Service Provider's status as an independent contractor.",
        )
        .clause(
            "LIABILITY AND INDEMNIFICATION",
            "Service Provider's liability under this Agreement shall be limited to the total amount paid by Client to Service Provider. Each party agrees to indemnify and hold harmless the other party from any claims arising out of their respective negligent acts or omissions.",
        )
        .clause("SPECIAL TERMS AND CONDITIONS", fill(&self.custom_terms, &TERMS))
        .clause(
            "GOVERNING LAW",
            &format!(
                "This Agreement shall be governed by and construed in accordance with the laws of {}.",
                fill(&self.governing_law, &GOVERNING_LAW)
            ),
        )
        .clause(
            "ENTIRE AGREEMENT",
            "This Agreement constitutes the entire agreement between the parties and supersedes all prior negotiations, representations, or agreements relating to the subject matter hereof.",
        )
        .signatures(&[("SERVICE PROVIDER", provider), ("CLIENT", client)]);
        doc.finish()
    }
}
