// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fenestra_core::{
    CancellationToken, CompositeDisposable, Disposable, SerialDisposable,
    SingleAssignmentDisposable,
};

fn token() -> CancellationToken {
    CancellationToken::new()
}

#[test]
fn test_serial_replace_disposes_previous_resource() {
    let serial = SerialDisposable::new();
    let first = token();
    let second = token();

    serial.replace(Box::new(first.clone()));
    serial.replace(Box::new(second.clone()));

    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

#[test]
fn test_serial_dispose_releases_current_and_future_resources() {
    let serial = SerialDisposable::new();
    let current = token();
    serial.replace(Box::new(current.clone()));

    serial.dispose();
    assert!(current.is_cancelled());
    assert!(serial.is_disposed());

    // Assignment after disposal is released immediately
    let late = token();
    serial.replace(Box::new(late.clone()));
    assert!(late.is_cancelled());
}

#[test]
fn test_serial_dispose_is_idempotent() {
    let serial = SerialDisposable::new();
    serial.replace(Box::new(token()));
    serial.dispose();
    serial.dispose();
    assert!(serial.is_disposed());
}

#[test]
fn test_single_assignment_holds_resource_until_disposed() {
    let single = SingleAssignmentDisposable::new();
    let resource = token();

    single.set(Box::new(resource.clone())).unwrap();
    assert!(!resource.is_cancelled());

    single.dispose();
    assert!(resource.is_cancelled());
}

#[test]
fn test_single_assignment_refuses_second_assignment() {
    let single = SingleAssignmentDisposable::new();
    single.set(Box::new(token())).unwrap();
    assert!(single.set(Box::new(token())).is_err());
}

#[test]
fn test_single_assignment_disposed_before_assignment_releases_incoming() {
    let single = SingleAssignmentDisposable::new();
    single.dispose();

    let resource = token();
    single.set(Box::new(resource.clone())).unwrap();
    assert!(resource.is_cancelled());
}

#[test]
fn test_composite_disposes_all_children_exactly_once() {
    let composite = CompositeDisposable::new();
    let first = token();
    let second = token();
    composite.add(Box::new(first.clone()));
    composite.add(Box::new(second.clone()));
    assert_eq!(composite.len(), 2);

    composite.dispose();
    composite.dispose(); // Idempotent

    assert!(first.is_cancelled());
    assert!(second.is_cancelled());
    assert!(composite.is_disposed());
    assert!(composite.is_empty());
}

#[test]
fn test_composite_add_after_dispose_releases_immediately() {
    let composite = CompositeDisposable::new();
    composite.dispose();

    let late = token();
    composite.add(Box::new(late.clone()));
    assert!(late.is_cancelled());
}

#[test]
fn test_clones_share_disposal_state() {
    let composite = CompositeDisposable::new();
    let clone = composite.clone();
    let child = token();
    composite.add(Box::new(child.clone()));

    clone.dispose();

    assert!(child.is_cancelled());
    assert!(composite.is_disposed());
}
