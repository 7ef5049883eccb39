use crate::models::user::UserRecord;

/// Working copy of the user records, in insertion order
#[derive(Debug, Default, Clone)]
pub struct UserList {
    users: Vec<UserRecord>,
}

impl UserList {
    /// Create an empty UserList
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Replace every record at once
    pub fn replace_all(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    /// Insert a record at the head of the list
    pub fn prepend(&mut self, user: UserRecord) {
        self.users.insert(0, user);
    }

    /// Highest id in the list, 0 when empty
    pub fn max_id(&self) -> u32 {
        self.users.iter().map(|user| user.id).max().unwrap_or(0)
    }

    /// Id for the next inserted record
    /// Returns None once the id space is exhausted
    pub fn next_id(&self) -> Option<u32> {
        self.max_id().checked_add(1)
    }

    /// First record with `id`, if any
    pub fn get(&self, id: u32) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn as_slice(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32) -> UserRecord {
        UserRecord::new(id, format!("User {id}"), format!("user{id}"), format!("user{id}@example.com"))
    }

    #[test]
    fn test_next_id_on_empty_list() {
        let list = UserList::new();
        assert_eq!(list.max_id(), 0);
        assert_eq!(list.next_id(), Some(1));
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let mut list = UserList::new();
        list.replace_all(vec![user(7), user(2), user(40)]);
        assert_eq!(list.next_id(), Some(41));
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut list = UserList::new();
        list.replace_all(vec![user(u32::MAX)]);
        assert_eq!(list.next_id(), None);
    }

    #[test]
    fn test_prepend_puts_record_first() {
        let mut list = UserList::new();
        list.replace_all(vec![user(1), user(2)]);
        list.prepend(user(3));

        let ids: Vec<u32> = list.as_slice().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_replace_all_discards_previous() {
        let mut list = UserList::new();
        list.replace_all(vec![user(1), user(2)]);
        list.replace_all(vec![user(9)]);

        assert_eq!(list.len(), 1);
        assert!(list.get(1).is_none());
        assert!(list.get(9).is_some());
    }
}
