//! Клиентская пагинация (номер страницы с 1)

use serde::{Deserialize, Serialize};

/// Размер страницы и её номер (с 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page_size: usize,
    pub page_index: usize,
}

impl PageWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_index: 1,
        }
    }

    pub fn reset(&mut self) {
        self.page_index = 1;
    }

    /// Ставит новый размер страницы и возвращается на первую
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 1;
    }

    /// Переход на страницу с ограничением в `1..=total_pages`
    pub fn go_to(&mut self, page_index: usize, total_count: usize) {
        self.page_index = page_index.clamp(1, total_pages(total_count, self.page_size));
    }

    pub fn next(&mut self, total_count: usize) {
        if has_next(self.page_index, self.page_size, total_count) {
            self.page_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page_index > 1 {
            self.page_index -= 1;
        }
    }

    /// Если после фильтрации страниц стало меньше, сдвигаемся на последнюю
    pub fn clamp(&mut self, total_count: usize) {
        self.go_to(self.page_index, total_count);
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Видимое окно строк и состояние кнопок навигации
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Количество страниц, минимум 1 даже для пустой коллекции
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_count.div_ceil(page_size).max(1)
}

/// "Следующая" недоступна, когда `page_index * page_size >= total_count`
pub fn has_next(page_index: usize, page_size: usize, total_count: usize) -> bool {
    page_index.saturating_mul(page_size.max(1)) < total_count
}

/// Вырезает страницу `page_index` (с 1) из коллекции
pub fn paginate<T: Clone>(rows: &[T], page_size: usize, page_index: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = rows.len();
    let total_pages = total_pages(total_count, page_size);
    let page_index = page_index.clamp(1, total_pages);

    let start = ((page_index - 1) * page_size).min(total_count);
    let end = (page_index * page_size).min(total_count);

    Page {
        rows: rows[start..end].to_vec(),
        page_index,
        page_size,
        total_pages,
        total_count,
        has_prev: page_index > 1,
        has_next: has_next(page_index, page_size, total_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_25_rows_by_10() {
        let rows: Vec<u32> = (0..25).collect();
        let page = paginate(&rows, 10, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.rows, vec![20, 21, 22, 23, 24]);
        assert!(!page.has_next);
        assert!(page.has_prev);

        let first = paginate(&rows, 10, 1);
        assert!(!first.has_prev);
        assert!(first.has_next);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let rows: Vec<u32> = Vec::new();
        let page = paginate(&rows, 10, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.rows.is_empty());
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        let rows: Vec<u32> = (0..12).collect();
        let page = paginate(&rows, 5, 10);
        assert_eq!(page.page_index, 3);
        assert_eq!(page.rows, vec![10, 11]);

        let page = paginate(&rows, 5, 0);
        assert_eq!(page.page_index, 1);
    }

    #[test]
    fn test_pages_reconstruct_collection() {
        for len in [0usize, 1, 9, 10, 11, 37] {
            let rows: Vec<usize> = (0..len).collect();
            for size in [1usize, 3, 10, 50] {
                let pages = total_pages(len, size);
                let mut joined = Vec::new();
                for i in 1..=pages {
                    let page = paginate(&rows, size, i);
                    assert!(page.rows.len() <= size);
                    joined.extend(page.rows);
                }
                assert_eq!(joined, rows, "len={} size={}", len, size);
            }
        }
    }

    #[test]
    fn test_window_navigation() {
        let mut window = PageWindow::new(10);
        window.next(25);
        window.next(25);
        window.next(25);
        assert_eq!(window.page_index, 3);
        window.prev();
        assert_eq!(window.page_index, 2);

        window.set_page_size(20);
        assert_eq!(window.page_index, 1);

        window.go_to(99, 25);
        assert_eq!(window.page_index, 2);

        window.clamp(3);
        assert_eq!(window.page_index, 1);
    }
}
