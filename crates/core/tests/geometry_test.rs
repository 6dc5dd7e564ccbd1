//! Bounding-box arithmetic.

use folio_core::BoundingBox;

fn boxes() -> Vec<BoundingBox> {
    vec![
        BoundingBox::new(0.0, 0.0, 10.0, 10.0),
        BoundingBox::new(5.0, -3.0, 7.0, 2.0),
        BoundingBox::new(-20.0, 40.0, -10.0, 50.0),
        BoundingBox::new(1.5, 1.5, 1.5, 1.5),
    ]
}

#[test]
fn test_union_commutative_and_covering() {
    for a in boxes() {
        for b in boxes() {
            let u = a.union(&b);
            assert_eq!(u, b.union(&a));
            assert!(u.contains_box(&a), "{u} should contain {a}");
            assert!(u.contains_box(&b), "{u} should contain {b}");
        }
    }
}

#[test]
fn test_union_associative() {
    for a in boxes() {
        for b in boxes() {
            for c in boxes() {
                assert_eq!((a | b) | c, a | (b | c));
            }
        }
    }
}

#[test]
fn test_enclosing() {
    let all = boxes();
    assert_eq!(
        BoundingBox::enclosing(&all),
        Some(BoundingBox::new(-20.0, -3.0, 10.0, 50.0))
    );
    assert_eq!(BoundingBox::enclosing(&[]), None);
}

#[test]
fn test_intersection_and_containment() {
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
    assert!(a.intersects(&b));
    assert_eq!(a.intersection(&b), Some(BoundingBox::new(5.0, 5.0, 10.0, 10.0)));
    assert!(a.contains(10.0, 0.0));
    assert!(!a.contains(10.1, 0.0));
    assert_eq!(a.center(), (5.0, 5.0));

    let far = BoundingBox::new(11.0, 0.0, 12.0, 1.0);
    assert!(!a.intersects(&far));
    assert_eq!(a.intersection(&far), None);
}

#[test]
fn test_validity() {
    assert!(BoundingBox::new(0.0, 0.0, 1.0, 1.0).is_valid());
    assert!(!BoundingBox::new(0.0, 0.0, 0.0, 1.0).is_valid());
    assert!(!BoundingBox::default().is_valid());
    let flipped = BoundingBox::new(4.0, 3.0, 1.0, 2.0);
    assert!(!flipped.is_valid());
    assert_eq!(flipped.normalized(), BoundingBox::new(1.0, 2.0, 4.0, 3.0));
}

#[test]
fn test_display() {
    insta::assert_snapshot!(BoundingBox::new(0.0, 1.5, 10.0, 20.25), @"BB(0,1.5,10,20.25)");
}
