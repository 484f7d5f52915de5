use crate::rect::Rect;

#[derive(Debug, Clone, Copy)]
struct Event {
    x: f64,
    index: usize,
    start: bool,
}

/// Mark every rectangle that intersects at least one other rectangle.
///
/// Sweep over start/end events in x order, keeping the set of rectangles the
/// sweep line currently cuts. At equal x a start sorts before an end, so
/// rectangles that merely share an edge count as overlapping, on both axes.
pub fn compute_overlaps(rects: &mut [Rect]) {
    for r in rects.iter_mut() {
        r.overlaps = false;
    }

    let mut events = Vec::with_capacity(rects.len() * 2);
    for (index, r) in rects.iter().enumerate() {
        events.push(Event {
            x: r.x,
            index,
            start: true,
        });
        events.push(Event {
            x: r.right(),
            index,
            start: false,
        });
    }
    events.sort_by(|a, b| a.x.total_cmp(&b.x).then(b.start.cmp(&a.start)));

    let mut active: Vec<usize> = Vec::new();
    for e in events {
        if e.start {
            for &i in &active {
                if rects[i].bottom() < rects[e.index].y {
                    continue;
                }
                if rects[e.index].bottom() < rects[i].y {
                    continue;
                }
                rects[i].overlaps = true;
                rects[e.index].overlaps = true;
            }
            active.push(e.index);
        } else {
            active.retain(|&i| i != e.index);
        }
    }
}
