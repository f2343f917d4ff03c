use crate::query::renderer::{Render, Renderer, filter::FilterClause};
use model::query::selection::Selection;

impl Render for Selection {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            // Wildcard is only meaningful in the select list.
            if column == "*" {
                r.sql.push('*');
            } else {
                r.render_identifier(column);
            }
        }

        r.sql.push_str(" FROM ");
        r.render_identifier(&self.table);

        if !self.filter.is_empty() {
            r.sql.push_str(" WHERE ");
            FilterClause(&self.filter).render(r);
        }

        if let Some(order) = self.order.as_ref().filter(|o| !o.is_empty()) {
            r.sql.push_str(" ORDER BY ");
            for (i, key) in order.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                r.render_identifier(&key.name);
                r.sql.push_str(&format!(" {}", key.order));
            }
        }

        if let Some(limit) = self.limit {
            r.sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            r.sql.push_str(&format!(" OFFSET {offset}"));
        }

        r.sql.push(';');
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        RenderError,
        dialect::{MySql, Postgres},
        render_selection,
    };
    use model::{core::value::Value, query::selection::Selection};
    use selection_builder::StructureError;
    use serde_json::json;

    fn selection(raw: serde_json::Value) -> Selection {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_render_full_selection() {
        let s = selection(json!({
            "table": "people",
            "columns": ["name", "age"],
            "filter": [
                {"column": "age", "equation": {"Greater": 18}},
                [{"column": "city", "equation": {"Equal": "NYC"}}],
                "Or",
                {"column": "vip", "equation": {"Equal": true}}
            ],
            "order": [{"name": "age", "order": "Desc"}, {"name": "name", "order": "Asc"}],
            "limit": 10,
            "offset": 20
        }));

        let (sql, params) = render_selection(&s, &Postgres, 32).unwrap();
        assert_eq!(
            sql,
            r#"SELECT "name", "age" FROM "people" WHERE "age" > $1 AND ("city" = $2) OR "vip" = $3 ORDER BY "age" DESC, "name" ASC LIMIT 10 OFFSET 20;"#
        );
        assert_eq!(
            params,
            vec![
                Value::Int(18),
                Value::String("NYC".into()),
                Value::Boolean(true)
            ]
        );
    }

    #[test]
    fn test_render_without_filter() {
        let s = selection(json!({"table": "sales.orders", "columns": ["*"]}));
        let (sql, params) = render_selection(&s, &MySql, 32).unwrap();
        assert_eq!(sql, "SELECT * FROM `sales`.`orders`;");
        assert!(params.is_empty());
    }

    #[test]
    fn test_wildcard_column_in_filter_is_quoted() {
        let s = selection(json!({
            "table": "t",
            "columns": ["a"],
            "filter": [{"column": "*", "equation": {"Equal": 1}}]
        }));

        let (sql, _) = render_selection(&s, &Postgres, 32).unwrap();
        assert_eq!(sql, r#"SELECT "a" FROM "t" WHERE "*" = $1;"#);
    }

    #[test]
    fn test_render_rejects_invalid_structure() {
        let s = selection(json!({
            "table": "t",
            "columns": ["a"],
            "filter": ["And", {"column": "a", "equation": {"Equal": 1}}]
        }));

        let err = render_selection(&s, &Postgres, 32).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidStructure(StructureError::UnexpectedJunction(_))
        ));
    }
}
