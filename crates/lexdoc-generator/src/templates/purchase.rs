//! Purchase agreement template

use super::{fill, money, DocumentBuilder, Slot};
use lexdoc_domain::FormValues;

pub const SELLER: Slot = Slot::new("party1Name", &["sellerName"], "[SELLER NAME]");
pub const SELLER_ADDRESS: Slot = Slot::new("party1Address", &["sellerAddress"], "[SELLER ADDRESS]");
pub const BUYER: Slot = Slot::new("party2Name", &["buyerName"], "[BUYER NAME]");
pub const BUYER_ADDRESS: Slot = Slot::new("party2Address", &["buyerAddress"], "[BUYER ADDRESS]");
pub const ITEM: Slot = Slot::new("itemDescription", &[], "[ITEM DESCRIPTION]");
pub const PRICE: Slot = Slot::new("amount", &["purchasePrice"], "[PURCHASE PRICE]");
pub const DOWN_PAYMENT: Slot = Slot::new(
    "downPayment",
    &[],
    "No down payment is required; the full purchase price is due at closing.",
);
pub const CLOSING: Slot = Slot::new("date", &["closingDate"], "[CLOSING DATE]");
pub const INSPECTION: Slot = Slot::new(
    "inspectionPeriod",
    &[],
    "Buyer shall have seven (7) days from the date of this Agreement to inspect the item and notify Seller in writing of any defects.",
);
pub const FINANCING: Slot = Slot::new(
    "financing",
    &[],
    "This purchase is not contingent upon Buyer obtaining financing.",
);
pub const WARRANTIES: Slot = Slot::new(
    "warranties",
    &[],
    "Seller warrants that Seller holds good title to the item, free of all liens and encumbrances. Except as stated herein, the item is sold \"as is\".",
);
pub const TERMS: Slot = Slot::new(
    "customTerms",
    &["specialConditions", "specialTerms"],
    "No additional terms specified.",
);
pub const GOVERNING_LAW: Slot = Slot::new("governingLaw", &[], "[STATE/JURISDICTION]");

pub const SLOTS: &[Slot] = &[
    SELLER,
    SELLER_ADDRESS,
    BUYER,
    BUYER_ADDRESS,
    ITEM,
    PRICE,
    DOWN_PAYMENT,
    CLOSING,
    INSPECTION,
    FINANCING,
    WARRANTIES,
    TERMS,
    GOVERNING_LAW,
];

/// Values of a purchase agreement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseTerms {
    pub seller: Option<String>,
    pub seller_address: Option<String>,
    pub buyer: Option<String>,
    pub buyer_address: Option<String>,
    pub item: Option<String>,
    pub price: Option<String>,
    pub down_payment: Option<String>,
    pub closing_date: Option<String>,
    pub inspection_period: Option<String>,
    pub financing: Option<String>,
    pub warranties: Option<String>,
    pub custom_terms: Option<String>,
    pub governing_law: Option<String>,
}

impl PurchaseTerms {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            seller: SELLER.read(values),
            seller_address: SELLER_ADDRESS.read(values),
            buyer: BUYER.read(values),
            buyer_address: BUYER_ADDRESS.read(values),
            item: ITEM.read(values),
            price: PRICE.read(values),
            down_payment: DOWN_PAYMENT.read(values),
            closing_date: CLOSING.read(values),
            inspection_period: INSPECTION.read(values),
            financing: FINANCING.read(values),
            warranties: WARRANTIES.read(values),
            custom_terms: TERMS.read(values),
            governing_law: GOVERNING_LAW.read(values),
        }
    }

    pub fn render(&self) -> String {
        let seller = fill(&self.seller, &SELLER);
        let buyer = fill(&self.buyer, &BUYER);
        let closing = fill(&self.closing_date, &CLOSING);

        let down_payment = match &self.down_payment {
            Some(_) => format!(
                "Buyer shall pay a down payment of {} upon execution of this Agreement, to be credited against the purchase price at closing.",
                money(&self.down_payment, &DOWN_PAYMENT)
            ),
            None => DOWN_PAYMENT.fallback.to_string(),
        };

        let mut doc = DocumentBuilder::new("PURCHASE AGREEMENT");
        doc.paragraph(&format!(
            "This Purchase Agreement (\"Agreement\") is entered into between {} (\"Seller\"), and {} (\"Buyer\"), for a sale to close on {}.",
            seller, buyer, closing
        ))
        .clause(
            "PARTIES",
            &format!(
                "Seller: {}\nAddress: {}\n\nBuyer: {}\nAddress: {}",
                seller,
                fill(&self.seller_address, &SELLER_ADDRESS),
                buyer,
                fill(&self.buyer_address, &BUYER_ADDRESS)
            ),
        )
        .clause(
            "SALE OF ITEM",
            &format!(
                "Seller agrees to sell and Buyer agrees to buy the following: {} (the \"Item\").",
                fill(&self.item, &ITEM)
            ),
        )
        .clause(
            "PURCHASE PRICE",
            &format!(
                "The total purchase price for the Item is {}, payable by Buyer to Seller at closing.",
                money(&self.price, &PRICE)
            ),
        )
        .clause("DOWN PAYMENT", &down_payment)
        .clause("FINANCING", fill(&self.financing, &FINANCING))
        .clause(
            "CLOSING AND DELIVERY",
            &format!(
                "Closing shall take place and the Item shall be delivered to Buyer on {}. Risk of loss passes to Buyer upon delivery.",
                closing
            ),
        )
        .clause("INSPECTION", fill(&self.inspection_period, &INSPECTION))
        .clause("WARRANTIES", fill(&self.warranties, &WARRANTIES))
        .clause("SPECIAL CONDITIONS", fill(&self.custom_terms, &TERMS))
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
        .signatures(&[("SELLER", seller), ("BUYER", buyer)]);
        doc.finish()
    }
}
