use super::*;

#[test]
fn fmt_number_trims_trailing_zeros() {
    assert_eq!(fmt_number(50.0), "50");
    assert_eq!(fmt_number(12.5), "12.5");
    assert_eq!(fmt_number(1.0 / 3.0), "0.3333");
    assert_eq!(fmt_number(-0.00001), "0");
    assert_eq!(fmt_number(f64::NAN), "0");
}

#[test]
fn box_is_percent_of_page() {
    let g = Geometry {
        x: 103.0,
        y: 309.0,
        width: 206.0,
        height: 61.8,
        rotation: 15.0,
    };
    let b = ElementBox::from_geometry(&g, PageSize::default());
    assert_eq!(fmt_number(b.left), "25");
    assert_eq!(fmt_number(b.top), "50");
    assert_eq!(fmt_number(b.width), "50");
    assert_eq!(fmt_number(b.height), "10");
    assert_eq!(b.rotation, 15.0);
}

#[test]
fn non_finite_geometry_degrades_to_zero() {
    let g = Geometry {
        x: f64::INFINITY,
        rotation: f64::NAN,
        ..Geometry::default()
    };
    let b = ElementBox::from_geometry(&g, PageSize::default());
    assert_eq!(b.left, 0.0);
    assert_eq!(b.rotation, 0.0);
}

#[test]
fn page_size_validation() {
    assert!(PageSize::default().validate().is_ok());
    assert!(
        PageSize {
            width: 0.0,
            height: 10.0
        }
        .validate()
        .is_err()
    );
    assert_eq!(PageSize::default().aspect_ratio(), "412:618");
}
