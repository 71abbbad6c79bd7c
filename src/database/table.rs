/// A row of the in-memory table that is identified by a unique numeric ID.
pub trait Record {
    fn id(&self) -> u64;
}

/// In-memory table that keeps rows in insertion order. IDs are handed out from a monotonically
/// increasing counter and are never reused, even after rows are removed.
#[derive(Debug)]
pub struct Table<T: Record> {
    rows: Vec<T>,
    last_id: u64,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T: Record> Table<T> {
    /// Returns all rows in insertion order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row with the specified ID.
    pub fn get(&self, id: u64) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Returns a mutable reference to the row with the specified ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// Reserves the next ID and appends the row built for it.
    pub fn insert_with<F>(&mut self, build: F) -> &T
    where
        F: FnOnce(u64) -> T,
    {
        self.last_id += 1;
        let index = self.rows.len();
        self.rows.push(build(self.last_id));
        &self.rows[index]
    }

    /// Removes the row with the specified ID, returns `None` if there is no such row.
    pub fn remove(&mut self, id: u64) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }
}
