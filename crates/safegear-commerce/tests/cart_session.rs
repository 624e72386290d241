//! End-to-end tests for the persistent cart session and checkout flow.

use std::sync::Mutex;

use safegear_commerce::prelude::*;
use safegear_store::{FileStore, MemoryStore, ObjectStore};

fn hard_hat() -> Product {
    Product::new(
        "HH-01",
        "SafeGear Hard Hat",
        "safegear-hard-hat",
        Money::new(85000, Currency::KES),
    )
    .with_certification("EN 397")
    .with_spec("material", "HDPE")
    .with_spec("color", "Yellow")
    .with_image("https://img.safegear.co.ke/hh-01.jpg")
    .with_stock(40)
}

fn safety_boots() -> Product {
    Product::new(
        "BT-02",
        "Steel-Toe Boots",
        "steel-toe-boots",
        Money::new(450000, Currency::KES),
    )
    .with_stock(8)
}

fn customer() -> CustomerDetails {
    CustomerDetails::new("Wanjiku Kamau", "0712345678", "Industrial Area", "Nairobi")
}

/// Gateway that records the last submission and can be told to fail.
#[derive(Default)]
struct StubGateway {
    fail: bool,
    submissions: Mutex<Vec<OrderSubmission>>,
}

impl StubGateway {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl OrderGateway for StubGateway {
    fn submit(&self, submission: &OrderSubmission) -> Result<OrderReceipt, CommerceError> {
        if self.fail {
            return Err(CommerceError::SubmissionFailed(
                "order service unavailable".to_string(),
            ));
        }
        self.submissions
            .lock()
            .unwrap()
            .push(submission.clone());
        Ok(OrderReceipt {
            order_id: OrderId::generate(),
        })
    }
}

#[test]
fn cart_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let hat = hard_hat();
    let boots = safety_boots();

    {
        let mut session = CartSession::open(FileStore::open(dir.path()).unwrap());
        session.add_item(CartLine::from_product(&hat, 2));
        session.add_item(CartLine::from_product(&boots, 1));
    }

    let session = CartSession::open(FileStore::open(dir.path()).unwrap());
    let items = session.cart().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sku, "HH-01");
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].specs.get("color"), Some(&"Yellow".to_string()));
    assert_eq!(items[1].sku, "BT-02");
    assert_eq!(session.total_price().amount_cents, 2 * 85000 + 450000);
}

#[test]
fn corrupt_persisted_cart_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store.set_raw(CART_STORAGE_KEY, b"\x00\x01 definitely not json").unwrap();

    let session = CartSession::open(store);
    assert!(session.cart().is_empty());
}

#[test]
fn emptied_cart_leaves_no_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let hat = hard_hat();

    let mut session = CartSession::open(FileStore::open(dir.path()).unwrap());
    session.add_item(CartLine::from_product(&hat, 1));
    session.remove_item(&hat.id);

    let store = FileStore::open(dir.path()).unwrap();
    assert!(!store.exists(CART_STORAGE_KEY).unwrap());
}

#[test]
fn place_order_clears_cart_on_success() {
    let mut session = CartSession::open(MemoryStore::new());
    session.add_item(CartLine::from_product(&hard_hat(), 2));
    let old_cart_id = session.cart().id().clone();

    let gateway = StubGateway::default();
    let receipt = session
        .place_order(&gateway, customer(), Payment::mpesa(Some("QCX12345".into())))
        .unwrap();

    assert!(!receipt.order_id.as_str().is_empty());
    assert!(session.cart().is_empty());
    assert_ne!(session.cart().id(), &old_cart_id);

    let submissions = gateway.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].item_count(), 2);
    assert_eq!(submissions[0].totals.subtotal.amount_cents, 170000);
}

#[test]
fn place_order_failure_leaves_cart_intact() {
    let mut session = CartSession::open(MemoryStore::new());
    session.add_item(CartLine::from_product(&hard_hat(), 2));

    let gateway = StubGateway::failing();
    let result = session.place_order(&gateway, customer(), Payment::cash_on_delivery());

    assert!(matches!(result, Err(CommerceError::SubmissionFailed(_))));
    assert_eq!(session.cart().item_count(), 2);
}

#[test]
fn place_order_rejects_empty_cart() {
    let mut session = CartSession::open(MemoryStore::new());
    let gateway = StubGateway::default();

    let result = session.place_order(&gateway, customer(), Payment::cash_on_delivery());
    assert!(matches!(result, Err(CommerceError::EmptyCart)));
}

#[test]
fn checkout_totals_match_storefront_figures() {
    // Cart worth KSh 15,750 checks out at VAT 2,520 + delivery 300
    let product = Product::new(
        "KIT-09",
        "Site Starter Kit",
        "site-starter-kit",
        Money::new(1_575_000, Currency::KES),
    )
    .with_stock(5);

    let mut session = CartSession::open(MemoryStore::new());
    session.add_item(CartLine::from_product(&product, 1));

    let submission =
        OrderSubmission::from_cart(session.cart(), customer(), Payment::cash_on_delivery())
            .unwrap();

    assert_eq!(submission.totals.subtotal.amount_cents, 1_575_000);
    assert_eq!(submission.totals.vat.amount_cents, 252_000);
    assert_eq!(submission.totals.delivery.amount_cents, 30_000);
    assert_eq!(submission.totals.grand_total.amount_cents, 1_857_000);
}
