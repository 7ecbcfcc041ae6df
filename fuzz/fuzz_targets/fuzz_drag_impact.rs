#![no_main]

use arbitrary::Arbitrary;
use dragline_core::{Direction, Position, Rect, Sides};
use dragline_impact::{
    DimensionSnapshot, DraggableDimension, DraggableMeasurement, DroppableDimension,
    DroppableMeasurement, get_draggables_inside_droppable, measure_draggable, measure_droppable,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzList {
    horizontal: bool,
    enabled: bool,
    origin: (i16, i16),
    size: (u8, u8),
    scroll: (i8, i8),
    items: Vec<FuzzItem>,
}

#[derive(Debug, Arbitrary)]
struct FuzzItem {
    offset: (u8, u8),
    size: (u8, u8),
    margin: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    lists: Vec<FuzzList>,
    dragging: u16,
    pointer: (i16, i16),
}

fuzz_target!(|input: FuzzInput| {
    // Cap sizes to keep each run fast.
    let lists = &input.lists[..input.lists.len().min(6)];

    let mut droppables: Vec<DroppableDimension> = Vec::new();
    let mut draggables: Vec<DraggableDimension> = Vec::new();
    for (l, list) in lists.iter().enumerate() {
        let direction = if list.horizontal {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let (x, y) = (f64::from(list.origin.0), f64::from(list.origin.1));
        let rect = Rect::from_origin_size(x, y, f64::from(list.size.0), f64::from(list.size.1));
        let measurement = DroppableMeasurement::new()
            .enabled(list.enabled)
            .scroll(Position::new(f64::from(list.scroll.0), f64::from(list.scroll.1)));
        let droppable_id = format!("list-{l}");
        droppables.push(measure_droppable(
            droppable_id.as_str(),
            direction,
            rect,
            measurement,
        ));

        for (i, item) in list.items.iter().take(16).enumerate() {
            let client = Rect::from_origin_size(
                x + f64::from(item.offset.0),
                y + f64::from(item.offset.1),
                f64::from(item.size.0),
                f64::from(item.size.1),
            );
            let measurement =
                DraggableMeasurement::new().margin(Sides::all(f64::from(item.margin % 32)));
            draggables.push(measure_draggable(
                format!("{droppable_id}::{i}"),
                droppable_id.as_str(),
                client,
                measurement,
            ));
        }
    }
    if draggables.is_empty() {
        return;
    }

    let dragging = draggables[usize::from(input.dragging) % draggables.len()].clone();
    let Ok(snapshot) = DimensionSnapshot::from_dimensions(draggables, droppables) else {
        return;
    };
    let pointer = Position::new(f64::from(input.pointer.0), f64::from(input.pointer.1));

    let impact = snapshot
        .compute_impact(pointer, &dragging.id)
        .expect("dragged item is in the snapshot");

    // Post-conditions that must always hold:
    let Some(destination) = impact.destination.as_ref() else {
        assert!(impact.movement.draggables.is_empty(), "movement without destination");
        assert!(impact.direction.is_none(), "direction without destination");
        return;
    };
    let target = snapshot
        .droppable(&destination.droppable_id)
        .expect("destination list exists");
    assert!(target.is_enabled, "destination list is disabled");
    assert!(
        target.page.translate(target.scroll).contains(pointer),
        "pointer is outside the destination's scrolled hit region"
    );
    assert_eq!(impact.direction, Some(target.axis.direction));

    let members = get_draggables_inside_droppable(target, snapshot.draggables());
    if target.id == dragging.droppable_id {
        assert!(destination.index < members.len(), "home index out of bounds");
    } else {
        assert!(destination.index <= members.len(), "foreign index out of bounds");
        assert!(!impact.movement.is_beyond_start_position);
    }
    for id in &impact.movement.draggables {
        assert_ne!(*id, dragging.id, "dragged item displaced itself");
        assert!(members.iter().any(|member| member.id == *id), "displaced a non-member");
    }
    assert_eq!(
        impact.movement.amount,
        target.axis.patch(target.axis.size_of(&dragging.page.with_margin))
    );
});
