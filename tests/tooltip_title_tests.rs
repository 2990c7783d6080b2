use chart_presentation::ChartError;
use chart_presentation::api::{
    ChartPresentationConfig, DateLabelConfig, PointStyle, TitleLabelFormat, TooltipConfig,
    TooltipItem, strip_label_artifacts,
};
use chart_presentation::render::Color;

#[test]
fn strip_removes_time_of_day_suffixes() {
    assert_eq!(strip_label_artifacts("Jan 15, 2023, 12:00:00 a.m."), "Jan 15, 2023");
    assert_eq!(strip_label_artifacts("Jan 15, 2023, 3:45:10 PM"), "Jan 15, 2023");
    assert_eq!(strip_label_artifacts("15/01/2023 10:30:00"), "15/01/2023");
    assert_eq!(strip_label_artifacts("15/01/2023 às 10:30"), "15/01/2023");
    assert_eq!(strip_label_artifacts("15/01/2023, 10:30"), "15/01/2023");
}

#[test]
fn strip_removes_abbreviation_periods() {
    assert_eq!(strip_label_artifacts("jan."), "jan");
    assert_eq!(strip_label_artifacts(" dez. "), "dez");
    assert_eq!(strip_label_artifacts("15 de jan. de 2023"), "15 de jan de 2023");
}

#[test]
fn strip_keeps_iso_timestamps_and_plain_labels() {
    assert_eq!(
        strip_label_artifacts("2023-01-15T10:00:00"),
        "2023-01-15T10:00:00"
    );
    assert_eq!(strip_label_artifacts("2023-01-15"), "2023-01-15");
    assert_eq!(strip_label_artifacts(""), "");
}

#[test]
fn full_date_title_formats_hovered_label() {
    let config = ChartPresentationConfig::default();
    let items = [
        TooltipItem::new("Jan 15, 2023, 12:00:00 a.m.", 0, 3),
        TooltipItem::new("Jan 16, 2023, 12:00:00 a.m.", 1, 3),
    ];

    let title = config.tooltip_title(&items).expect("title");
    assert_eq!(title, "15 de Janeiro de 2023");
}

#[test]
fn month_code_title_expands_abbreviation() {
    let config =
        ChartPresentationConfig::default().with_title_label_format(TitleLabelFormat::MonthCode);

    for (label, expected) in [("mar", "março"), ("Mar.", "março"), ("DEZ", "dezembro")] {
        let items = [TooltipItem::new(label, 0, 0)];
        assert_eq!(config.tooltip_title(&items).expect("title"), expected);
    }
}

#[test]
fn unknown_month_label_is_a_tagged_error() {
    let config =
        ChartPresentationConfig::default().with_title_label_format(TitleLabelFormat::MonthCode);
    let err = config
        .tooltip_title(&[TooltipItem::new("xyz", 0, 0)])
        .expect_err("unknown code");
    match err {
        ChartError::UnknownMonthCode { code } => assert_eq!(code, "xyz"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_hover_yields_empty_title() {
    let config = ChartPresentationConfig::default();
    assert_eq!(config.tooltip_title(&[]).expect("title"), "");
}

#[test]
fn title_or_raw_falls_back_to_label() {
    let tooltip = TooltipConfig::default();
    let items = [TooltipItem::new("semana 12", 0, 0)];
    let title = tooltip.title_or_raw(&items, TitleLabelFormat::FullDate, DateLabelConfig::default());
    assert_eq!(title, "semana 12");
}

#[test]
fn entry_callbacks_return_fixed_style() {
    let tooltip = TooltipConfig::default();
    let item = TooltipItem::new("2023-01-15", 2, 7).with_dataset_label("Acessos");

    let point_style = tooltip.label_point_style(&item);
    assert_eq!(point_style.point_style, PointStyle::RectRounded);
    assert_eq!(point_style.rotation, 0.0);

    let text_color = tooltip.label_text_color(&item);
    assert_eq!(text_color, Color::from_hex("#eeee").expect("valid color"));
}

#[test]
fn tooltip_defaults_match_dashboard_styling() {
    let tooltip = TooltipConfig::default();
    assert_eq!(tooltip.background_color.to_hex(), "#22223b");
    assert!(tooltip.use_point_style);
    assert!(tooltip.display_colors);
    assert_eq!(tooltip.padding, 16.0);
    assert_eq!(tooltip.box_padding, 4.0);
}

#[test]
fn failed_full_date_title_reports_hovered_label() {
    let config = ChartPresentationConfig::default();
    for label in ["12:00:00", "semana 12, 10:30"] {
        let err = config
            .tooltip_title(&[TooltipItem::new(label, 0, 0)])
            .expect_err("not a date");
        match err {
            ChartError::InvalidDate { input } => assert_eq!(input, label),
            other => panic!("unexpected error: {other}"),
        }
    }
}
