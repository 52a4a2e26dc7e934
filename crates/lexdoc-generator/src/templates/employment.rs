//! Employment contract template

use super::{fill, DocumentBuilder, Slot};
use lexdoc_domain::FormValues;

pub const EMPLOYER: Slot = Slot::new("party1Name", &["employerName"], "[EMPLOYER NAME]");
pub const EMPLOYER_ADDRESS: Slot =
    Slot::new("party1Address", &["employerAddress"], "[EMPLOYER ADDRESS]");
pub const EMPLOYEE: Slot = Slot::new("party2Name", &["employeeName"], "[EMPLOYEE NAME]");
pub const EMPLOYEE_ADDRESS: Slot =
    Slot::new("party2Address", &["employeeAddress"], "[EMPLOYEE ADDRESS]");
pub const JOB_TITLE: Slot = Slot::new("jobTitle", &[], "[JOB TITLE]");
pub const SALARY: Slot = Slot::new("amount", &["salary"], "[SALARY]");
pub const START: Slot = Slot::new("date", &["startDate"], "[START DATE]");
pub const SCHEDULE: Slot = Slot::new("workSchedule", &[], "[WORK SCHEDULE]");
pub const BENEFITS: Slot = Slot::new(
    "benefits",
    &[],
    "Employee shall be eligible for the benefits Employer makes generally available to employees in comparable positions, subject to the terms of the applicable plans.",
);
pub const TERMINATION: Slot = Slot::new(
    "terminationClause",
    &[],
    "Either party may terminate this employment at any time, with or without cause, upon two (2) weeks' written notice to the other party.",
);
pub const TERMS: Slot = Slot::new("customTerms", &["specialTerms"], "No additional terms specified.");
pub const GOVERNING_LAW: Slot = Slot::new("governingLaw", &[], "[STATE/JURISDICTION]");

pub const SLOTS: &[Slot] = &[
    EMPLOYER,
    EMPLOYER_ADDRESS,
    EMPLOYEE,
    EMPLOYEE_ADDRESS,
    JOB_TITLE,
    SALARY,
    START,
    SCHEDULE,
    BENEFITS,
    TERMINATION,
    TERMS,
    GOVERNING_LAW,
];

/// Values of an employment contract
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmploymentTerms {
    pub employer: Option<String>,
    pub employer_address: Option<String>,
    pub employee: Option<String>,
    pub employee_address: Option<String>,
    pub job_title: Option<String>,
    /// Kept as written, since salaries are often quoted per hour or per year
    pub salary: Option<String>,
    pub start_date: Option<String>,
    pub work_schedule: Option<String>,
    pub benefits: Option<String>,
    pub termination: Option<String>,
    pub custom_terms: Option<String>,
    pub governing_law: Option<String>,
}

impl EmploymentTerms {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            employer: EMPLOYER.read(values),
            employer_address: EMPLOYER_ADDRESS.read(values),
            employee: EMPLOYEE.read(values),
            employee_address: EMPLOYEE_ADDRESS.read(values),
            job_title: JOB_TITLE.read(values),
            salary: SALARY.read(values),
            start_date: START.read(values),
            work_schedule: SCHEDULE.read(values),
            benefits: BENEFITS.read(values),
            termination: TERMINATION.read(values),
            custom_terms: TERMS.read(values),
            governing_law: GOVERNING_LAW.read(values),
        }
    }

    pub fn render(&self) -> String {
        let employer = fill(&self.employer, &EMPLOYER);
        let employee = fill(&self.employee, &EMPLOYEE);
        let start = fill(&self.start_date, &START);
        let title = fill(&self.job_title, &JOB_TITLE);

        let mut doc = DocumentBuilder::new("EMPLOYMENT CONTRACT");
        doc.paragraph(&format!(
            "This Employment Contract (\"Agreement\") is entered into on {}, between {} (\"Employer\"), and {} (\"Employee\").",
            start, employer, employee
        ))
        .clause(
            "PARTIES",
            &format!(
                "Employer: {}\nAddress: {}\n\nEmployee: {}\nAddress: {}",
                employer,
                fill(&self.employer_address, &EMPLOYER_ADDRESS),
                employee,
                fill(&self.employee_address, &EMPLOYEE_ADDRESS)
            ),
        )
        .clause(
            "POSITION AND DUTIES",
            &format!(
                "Employer hereby employs Employee in the position of {}. Employee shall perform the duties customarily associated with this position and such other duties as Employer may reasonably assign.",
                title
            ),
        )
        .clause(
            "COMMENCEMENT",
            &format!("Employment under this Agreement shall commence on {}.", start),
        )
        .clause(
            "COMPENSATION",
            &format!(
                "As compensation for the services rendered, Employer shall pay Employee {}, less applicable withholdings and deductions, in accordance with Employer's regular payroll practices.",
                fill(&self.salary, &SALARY)
            ),
        )
        .clause(
            "WORK SCHEDULE",
            &format!(
                "Employee's regular work schedule shall be: {}.",
                fill(&self.work_schedule, &SCHEDULE)
            ),
        )
        .clause("BENEFITS", fill(&self.benefits, &BENEFITS))
        .clause(
            "CONFIDENTIALITY",
            "Employee shall not, during or after employment, disclose any confidential or proprietary information of Employer to any third party except as required in the performance of Employee's duties.",
        )
        .clause("TERMINATION", fill(&self.termination, &TERMINATION))
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
        .signatures(&[("EMPLOYER", employer), ("EMPLOYEE", employee)]);
        doc.finish()
    }
}
