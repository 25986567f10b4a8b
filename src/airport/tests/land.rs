use crate::airport::error::AirportError::{DuplicateLanding, HangarFull, StormyLanding};
use crate::airport::tests::utils::{clear_airport, hangar_ids, id, land_all, stormy_airport};
use crate::airport::{Airport, DEFAULT_CAPACITY};
use crate::plane::Plane;
use crate::weather::{FixedWeather, FnWeather};

#[test]
fn test_land_fills_up_to_capacity() {
    let mut airport = Airport::new(FixedWeather::clear());
    assert_eq!(DEFAULT_CAPACITY, airport.capacity());

    for (i, plane_id) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        airport.land(&mut Plane::airborne(*plane_id)).unwrap();
        assert_eq!(i + 1, airport.len());
    }

    let mut sixth = Plane::airborne("F");
    assert_eq!(Err(HangarFull), airport.land(&mut sixth));
    assert_eq!(5, airport.len());
    assert!(sixth.is_airborne());
}

#[test]
fn test_land_grounds_plane() {
    let mut airport = clear_airport(5);
    let mut plane = Plane::airborne("A");

    airport.land(&mut plane).unwrap();

    assert!(!plane.is_airborne());
    assert!(!airport.hangar()[0].is_airborne());
    assert!(airport.contains(&id("A")));
}

#[test]
fn test_land_keeps_arrival_order() {
    let mut airport = clear_airport(5);
    land_all(&mut airport, &["C", "A", "B"]);

    assert_eq!(vec![id("C"), id("A"), id("B")], hangar_ids(&airport));
}

#[test]
fn test_duplicate_landing() {
    let mut airport = clear_airport(5);
    land_all(&mut airport, &["A"]);

    let mut again = Plane::airborne("A");
    assert_eq!(Err(DuplicateLanding(id("A"))), airport.land(&mut again));
    assert_eq!(1, airport.len());
    assert!(again.is_airborne());
}

#[test]
fn test_duplicate_matched_by_id_not_instance() {
    let mut airport = clear_airport(5);
    let mut first = Plane::airborne("A");
    let mut second = Plane::airborne("A");

    airport.land(&mut first).unwrap();
    assert_eq!(Err(DuplicateLanding(id("A"))), airport.land(&mut second));
}

#[test]
fn test_stormy_landing() {
    let mut airport = stormy_airport(5);
    let mut plane = Plane::airborne("A");

    assert_eq!(Err(StormyLanding), airport.land(&mut plane));
    assert_eq!(0, airport.len());
    assert!(plane.is_airborne());
}

#[test]
fn test_full_checked_before_duplicate_and_weather() {
    let mut airport = clear_airport(2);
    land_all(&mut airport, &["A", "B"]);
    airport.weather_mut().stormy = true;

    assert_eq!(Err(HangarFull), airport.land(&mut Plane::airborne("A")));
    assert_eq!(Err(HangarFull), airport.land(&mut Plane::airborne("C")));
}

#[test]
fn test_duplicate_checked_before_weather() {
    let mut airport = clear_airport(5);
    land_all(&mut airport, &["A"]);
    airport.weather_mut().stormy = true;

    assert_eq!(
        Err(DuplicateLanding(id("A"))),
        airport.land(&mut Plane::airborne("A"))
    );
}

#[test]
fn test_weather_not_consulted_on_rejection() {
    let mut queries = 0;
    let mut airport = Airport::with_capacity(
        FnWeather(|| {
            queries += 1;
            false
        }),
        1,
    )
    .unwrap();

    airport.land(&mut Plane::airborne("A")).unwrap();
    assert_eq!(Err(HangarFull), airport.land(&mut Plane::airborne("B")));
    drop(airport);

    assert_eq!(1, queries);
}

#[test]
fn test_land_after_weather_clears() {
    let mut airport = stormy_airport(5);
    let mut plane = Plane::airborne("A");

    assert_eq!(Err(StormyLanding), airport.land(&mut plane));
    airport.weather_mut().stormy = false;
    assert_eq!(Ok(()), airport.land(&mut plane));
    assert_eq!(1, airport.len());
}
