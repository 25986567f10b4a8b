use crate::airport::Airport;
use crate::plane::{Plane, PlaneId};
use crate::weather::FixedWeather;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> PlaneId {
    Arc::from(s)
}

pub fn clear_airport(capacity: usize) -> Airport<FixedWeather> {
    Airport::with_capacity(FixedWeather::clear(), capacity).unwrap()
}

pub fn stormy_airport(capacity: usize) -> Airport<FixedWeather> {
    Airport::with_capacity(FixedWeather::stormy(), capacity).unwrap()
}

pub fn land_all(airport: &mut Airport<FixedWeather>, ids: &[&str]) {
    for plane_id in ids {
        airport.land(&mut Plane::airborne(*plane_id)).unwrap();
    }
}

pub fn hangar_ids<W: crate::weather::Weather>(airport: &Airport<W>) -> Vec<PlaneId> {
    airport.hangar().iter().map(|p| p.id.clone()).collect()
}

#[derive(Debug, Clone)]
pub enum Op {
    Land(PlaneId),
    TakeOff(PlaneId),
    TakeOffFirst,
}

pub fn arb_id() -> impl Strategy<Value = PlaneId> {
    prop_oneof![
        Just(id("PL_1")),
        Just(id("PL_2")),
        Just(id("PL_3")),
        Just(id("PL_4")),
        Just(id("PL_5")),
        Just(id("PL_6")),
        Just(id("PL_7")),
    ]
}

pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_id().prop_map(Op::Land),
        2 => arb_id().prop_map(Op::TakeOff),
        1 => Just(Op::TakeOffFirst),
    ]
}
