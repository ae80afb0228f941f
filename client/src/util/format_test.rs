use super::*;

#[test]
fn money_rounds_to_two_decimals() {
    assert_eq!(money(1062.0), "1062.00");
    assert_eq!(money(0.125), "0.13");
    assert_eq!(money(-4.5), "-4.50");
}

#[test]
fn opt_money_uses_placeholder() {
    assert_eq!(opt_money(None), EMPTY);
    assert_eq!(opt_money(Some(5.0)), "5.00");
}

#[test]
fn quantity_trims_trailing_zeros() {
    assert_eq!(quantity(10.0), "10");
    assert_eq!(quantity(2.5), "2.5");
    assert_eq!(quantity(0.125), "0.125");
    assert_eq!(quantity(-3.0), "-3");
    assert_eq!(quantity(0.0), "0");
}

#[test]
fn percent_formats_rate() {
    assert_eq!(percent(Some(18.0)), "18%");
    assert_eq!(percent(Some(2.5)), "2.5%");
    assert_eq!(percent(None), EMPTY);
}

#[test]
fn opt_text_treats_blank_as_absent() {
    assert_eq!(opt_text(Some("  ")), EMPTY);
    assert_eq!(opt_text(None), EMPTY);
    assert_eq!(opt_text(Some(" Acme ")), "Acme");
}

#[test]
fn date_is_day_month_year() {
    let d = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    assert_eq!(date(d), "02 May 2024");
}

#[test]
fn yes_no_formats_flags() {
    assert_eq!(yes_no(true), "Yes");
    assert_eq!(yes_no(false), "No");
}

#[test]
fn attachment_href_points_at_uploads() {
    assert_eq!(attachment_href("grns/a.pdf"), "/uploads/grns/a.pdf");
    assert_eq!(attachment_href("/grns/a.pdf"), "/uploads/grns/a.pdf");
}

#[test]
fn attachment_name_strips_directory_and_uuid_prefix() {
    let path = "grns/67e55044-10b1-426f-9247-bb680e5fe0c8-challan.pdf";
    assert_eq!(attachment_name(path), "challan.pdf");
}

#[test]
fn attachment_name_keeps_unprefixed_names() {
    assert_eq!(attachment_name("grns/challan.pdf"), "challan.pdf");
    assert_eq!(attachment_name("challan.pdf"), "challan.pdf");
}

#[test]
fn today_is_unknown_outside_browser() {
    assert_eq!(today(), None);
}
