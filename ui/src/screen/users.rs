use types::{
    NewUser,
    user::{ROLES, STATUSES},
};

use crate::{
    form::{Form, Rule},
    table::{Column, Renderer},
};

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").sortable().width("80px"),
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("role", "Role").sortable().width("120px"),
        Column::new("status", "Status")
            .sortable()
            .width("100px")
            .renderer(Renderer::Badge),
        Column::new("createdAt", "Join Date")
            .sortable()
            .width("150px")
            .renderer(Renderer::Date),
    ]
}

pub fn create_form() -> Form {
    Form::new()
        .field("name", "", vec![Rule::Required, Rule::MinLength(3)])
        .field("email", "", vec![Rule::Required, Rule::Email])
        .field("role", ROLES[2], vec![Rule::Required])
        .field("status", STATUSES[0], vec![Rule::Required])
}

pub fn draft(form: &Form) -> NewUser {
    NewUser {
        name: form.value("name").trim().to_string(),
        email: form.value("email").trim().to_string(),
        role: form.value("role").to_string(),
        status: form.value("status").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_and_keeps_defaults() {
        let mut form = create_form();
        form.set("name", "  Jane Smith ");
        form.set("email", "jane@example.com ");

        let draft = draft(&form);

        assert_eq!(draft.name, "Jane Smith");
        assert_eq!(draft.email, "jane@example.com");
        assert_eq!(draft.role, "User");
        assert_eq!(draft.status, "Active");
    }

    #[test]
    fn column_keys_are_unique() {
        let columns = columns();
        let mut keys: Vec<_> = columns.iter().map(|c| c.key.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), columns.len());
    }
}
