/// One page of a filtered sequence plus the size of the whole sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slices `[(page-1)*page_size, page*page_size)` out of `items`. Pages are
/// 1-based; anything outside the range gives an empty page.
pub fn paginate<T>(items: Vec<T>, page: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let start = page
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| index.checked_mul(page_size));

    let slice = match start {
        Some(start) if start < total => items
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect(),
        _ => Vec::new(),
    };

    Page {
        items: slice,
        total,
    }
}
