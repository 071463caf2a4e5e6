//! Bounded in-memory store of raw log lines.

use std::collections::VecDeque;

/// Raw lines in arrival order, capped at `capacity` (oldest dropped first).
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append lines, evicting from the front once full.
    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        for line in lines {
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_and_iter() {
        let mut buffer = LogBuffer::new(10);
        buffer.extend(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["one", "two"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_oldest_lines_are_evicted() {
        let mut buffer = LogBuffer::new(3);
        buffer.extend((0..5).map(|i| i.to_string()));
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_clear() {
        let mut buffer = LogBuffer::new(3);
        buffer.extend(vec!["x".to_string()]);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = LogBuffer::new(0);
        buffer.extend(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["b"]);
    }
}
