use super::*;
use records::PurchaseOrder;
use records::report::ReceiptStatus;

use crate::util::lookup::RefData;

#[test]
fn vendor_columns_show_negative_outstanding() {
    let summary = VendorSummary { vendor_id: 9, orders: 0, ordered_value: 0.0, invoiced_value: 120.0, outstanding: -120.0 };
    let cells: Vec<String> = vendor_columns().iter().map(|c| (c.render)(&summary, &RefData::default())).collect();
    assert_eq!(cells, ["#9", "0", "0.00", "120.00", "-120.00"]);
}

#[test]
fn receipt_columns_show_progress() {
    let row = ReceiptRow {
        order: PurchaseOrder { po_number: "PO-3".to_owned(), vendor_id: 1, item_id: 2, quantity: 8.0, rate: 2.0, ..PurchaseOrder::default() },
        status: ReceiptStatus { ordered: 8.0, received: 3.0, pending: 5.0 },
    };
    let cells: Vec<String> = receipt_columns().iter().map(|c| (c.render)(&row, &RefData::default())).collect();
    assert_eq!(cells, ["PO-3", "#1", "#2", "8", "3", "5", "16.00"]);
}
