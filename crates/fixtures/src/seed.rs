//! The demo record set.
//!
//! Mirrors the seed data of the original dashboard: 5 users, 4 suppliers,
//! 6 products, 3 purchase orders, 6 transactions, and the six-month activity
//! series. Amounts are cents; dates go through `parse_date` so a typo here
//! fails loudly at load time instead of skewing a classification.

use medtrack_auth::{Role, User};
use medtrack_catalog::{Product, ProductStatus, RegulatoryClass};
use medtrack_core::calendar::parse_date;
use medtrack_core::{DomainResult, OrderId, ProductId, SupplierId, TransactionId, UserId};
use medtrack_ledger::{Direction, Transaction};
use medtrack_purchasing::{LineItem, OrderStatus, PurchaseOrder};
use medtrack_reports::MonthlyActivity;
use medtrack_suppliers::{Supplier, SupplierStatus};

use crate::dataset::Dataset;

/// Build the fixture dataset.
pub fn seed() -> DomainResult<Dataset> {
    Ok(Dataset {
        users: users(),
        suppliers: suppliers()?,
        products: products()?,
        purchase_orders: purchase_orders()?,
        transactions: transactions()?,
        monthly_activity: monthly_activity(),
    })
}

fn users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role| User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
    };
    vec![
        user("1", "Dr. Sarah Johnson", "sarah.johnson@medical.com", Role::Admin),
        user("2", "Mike Chen", "mike.chen@medical.com", Role::InventoryManager),
        user("3", "Emily Davis", "emily.davis@medical.com", Role::Pharmacist),
        user("4", "Robert Wilson", "robert.wilson@medical.com", Role::ComplianceOfficer),
        user("5", "Jennifer Lee", "jennifer.lee@medical.com", Role::Executive),
    ]
}

fn suppliers() -> DomainResult<Vec<Supplier>> {
    let supplier = |id: &str,
                    name: &str,
                    contact: &str,
                    email: &str,
                    address: &str,
                    rating: f64,
                    license_expiry: &str,
                    created_at: &str|
     -> DomainResult<Supplier> {
        Ok(Supplier {
            id: SupplierId::new(id),
            name: name.to_string(),
            contact: contact.to_string(),
            email: email.to_string(),
            address: address.to_string(),
            rating,
            status: SupplierStatus::Active,
            license_expiry: parse_date(license_expiry)?,
            created_at: parse_date(created_at)?,
        })
    };
    Ok(vec![
        supplier(
            "1",
            "MedTech Solutions",
            "John Smith",
            "orders@medtech.com",
            "123 Medical Drive, Boston, MA",
            4.8,
            "2025-12-31",
            "2023-01-15",
        )?,
        supplier(
            "2",
            "PharmaCorp International",
            "Lisa Anderson",
            "supply@pharmacorp.com",
            "456 Pharma Ave, New York, NY",
            4.6,
            "2025-10-15",
            "2023-02-20",
        )?,
        supplier(
            "3",
            "BioMed Supplies",
            "David Brown",
            "contact@biomed.com",
            "789 Bio Street, San Francisco, CA",
            4.9,
            "2025-08-30",
            "2023-03-10",
        )?,
        supplier(
            "4",
            "Global Medical Corp",
            "Maria Rodriguez",
            "info@globalmedical.com",
            "321 Health Plaza, Chicago, IL",
            4.5,
            "2024-06-15",
            "2023-04-05",
        )?,
    ])
}

fn products() -> DomainResult<Vec<Product>> {
    struct Row<'a> {
        id: &'a str,
        name: &'a str,
        sku: &'a str,
        quantity: u32,
        min_threshold: u32,
        expiry_date: &'a str,
        batch_number: &'a str,
        supplier_id: &'a str,
        category: &'a str,
        unit_price_cents: u64,
        regulatory_class: RegulatoryClass,
        created_at: &'a str,
    }

    let rows = [
        Row {
            id: "1",
            name: "Surgical Masks (N95)",
            sku: "SKU-001",
            quantity: 1250,
            min_threshold: 500,
            expiry_date: "2025-06-30",
            batch_number: "BT-2024-001",
            supplier_id: "1",
            category: "PPE",
            unit_price_cents: 250,
            regulatory_class: RegulatoryClass::ClassIi,
            created_at: "2024-01-10",
        },
        Row {
            id: "2",
            name: "Disposable Syringes 10ml",
            sku: "SKU-002",
            quantity: 75,
            min_threshold: 100,
            expiry_date: "2024-12-15",
            batch_number: "BT-2024-002",
            supplier_id: "2",
            category: "Medical Devices",
            unit_price_cents: 85,
            regulatory_class: RegulatoryClass::ClassIi,
            created_at: "2024-01-15",
        },
        Row {
            id: "3",
            name: "Ibuprofen 200mg Tablets",
            sku: "SKU-003",
            quantity: 2500,
            min_threshold: 1000,
            expiry_date: "2024-03-20",
            batch_number: "BT-2024-003",
            supplier_id: "2",
            category: "Pharmaceuticals",
            unit_price_cents: 12,
            regulatory_class: RegulatoryClass::ClassI,
            created_at: "2024-01-20",
        },
        Row {
            id: "4",
            name: "Blood Pressure Monitor",
            sku: "SKU-004",
            quantity: 25,
            min_threshold: 10,
            expiry_date: "2026-01-15",
            batch_number: "BT-2024-004",
            supplier_id: "3",
            category: "Medical Equipment",
            unit_price_cents: 4500,
            regulatory_class: RegulatoryClass::ClassIi,
            created_at: "2024-01-25",
        },
        Row {
            id: "5",
            name: "Latex Gloves (Box of 100)",
            sku: "SKU-005",
            quantity: 15,
            min_threshold: 25,
            expiry_date: "2025-09-30",
            batch_number: "BT-2024-005",
            supplier_id: "1",
            category: "PPE",
            unit_price_cents: 850,
            regulatory_class: RegulatoryClass::ClassI,
            created_at: "2024-02-01",
        },
        Row {
            id: "6",
            name: "Digital Thermometer",
            sku: "SKU-006",
            quantity: 50,
            min_threshold: 20,
            expiry_date: "2027-03-15",
            batch_number: "BT-2024-006",
            supplier_id: "3",
            category: "Medical Equipment",
            unit_price_cents: 1575,
            regulatory_class: RegulatoryClass::ClassIi,
            created_at: "2024-02-05",
        },
    ];

    rows
        .into_iter()
        .map(|s| {
            Ok(Product {
                id: ProductId::new(s.id),
                name: s.name.to_string(),
                sku: s.sku.to_string(),
                quantity: s.quantity,
                min_threshold: s.min_threshold,
                expiry_date: parse_date(s.expiry_date)?,
                batch_number: s.batch_number.to_string(),
                supplier_id: SupplierId::new(s.supplier_id),
                status: ProductStatus::Active,
                category: s.category.to_string(),
                unit_price_cents: s.unit_price_cents,
                regulatory_class: s.regulatory_class,
                created_at: parse_date(s.created_at)?,
            })
        })
        .collect()
}

fn purchase_orders() -> DomainResult<Vec<PurchaseOrder>> {
    let line = |product_id: &str, quantity: u32, unit_price_cents: u64| LineItem {
        product_id: ProductId::new(product_id),
        quantity,
        unit_price_cents,
    };
    Ok(vec![
        PurchaseOrder {
            id: OrderId::new("1"),
            order_number: "PO-2024-001".to_string(),
            supplier_id: SupplierId::new("1"),
            order_date: parse_date("2024-02-15")?,
            expected_delivery: parse_date("2024-02-25")?,
            total_amount_cents: 525_000,
            status: OrderStatus::Delivered,
            items: vec![line("1", 2000, 250), line("5", 30, 850)],
            created_at: parse_date("2024-02-15")?,
        },
        PurchaseOrder {
            id: OrderId::new("2"),
            order_number: "PO-2024-002".to_string(),
            supplier_id: SupplierId::new("2"),
            order_date: parse_date("2024-02-20")?,
            expected_delivery: parse_date("2024-03-05")?,
            total_amount_cents: 138_500,
            status: OrderStatus::Pending,
            items: vec![line("2", 500, 85), line("3", 8000, 12)],
            created_at: parse_date("2024-02-20")?,
        },
        PurchaseOrder {
            id: OrderId::new("3"),
            order_number: "PO-2024-003".to_string(),
            supplier_id: SupplierId::new("3"),
            order_date: parse_date("2024-02-22")?,
            expected_delivery: parse_date("2024-03-08")?,
            total_amount_cents: 191_250,
            status: OrderStatus::Approved,
            items: vec![line("4", 15, 4500), line("6", 75, 1575)],
            created_at: parse_date("2024-02-22")?,
        },
    ])
}

fn transactions() -> DomainResult<Vec<Transaction>> {
    let tx = |id: &str,
              product_id: &str,
              quantity: i64,
              date: &str,
              direction: Direction,
              reference: &str,
              user_id: &str,
              notes: &str|
     -> DomainResult<Transaction> {
        Ok(Transaction {
            id: TransactionId::new(id),
            product_id: ProductId::new(product_id),
            quantity,
            transaction_date: parse_date(date)?,
            direction,
            reference: reference.to_string(),
            user_id: UserId::new(user_id),
            notes: Some(notes.to_string()),
        })
    };
    Ok(vec![
        tx("1", "1", 100, "2024-02-25", Direction::Inbound, "PO-2024-001", "2", "Delivery from MedTech Solutions")?,
        tx("2", "1", -50, "2024-02-26", Direction::Outbound, "REQ-001", "3", "Emergency department request")?,
        tx("3", "2", -25, "2024-02-27", Direction::Outbound, "REQ-002", "3", "ICU department request")?,
        tx("4", "4", 5, "2024-02-28", Direction::Inbound, "PO-2024-003", "2", "New equipment delivery")?,
        tx("5", "6", 25, "2024-03-01", Direction::Inbound, "PO-2024-003", "2", "Thermometer delivery")?,
        tx("6", "5", -10, "2024-03-02", Direction::Outbound, "REQ-003", "3", "Surgery department request")?,
    ])
}

fn monthly_activity() -> Vec<MonthlyActivity> {
    let month = |month: &str, transactions: u32, value_cents: u64| MonthlyActivity {
        month: month.to_string(),
        transactions,
        value_cents,
    };
    vec![
        month("Jan", 45, 1_250_000),
        month("Feb", 38, 980_000),
        month("Mar", 52, 1_520_000),
        month("Apr", 41, 1_130_000),
        month("May", 47, 1_360_000),
        month("Jun", 39, 1_090_000),
    ]
}
