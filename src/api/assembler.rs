//! Hypermedia decoration of customers.
//!
//! Pure functions from domain entities to their linked representations. They
//! take the public base URL (empty for relative links) and know nothing about
//! the web framework.

use crate::api::dto::customer::{CustomerCollection, CustomerResource, Link};
use crate::domain::entities::Customer;

/// Link relation pointing at the resource itself.
pub const REL_SELF: &str = "self";
/// Link relation pointing at the customer collection.
pub const REL_CUSTOMERS: &str = "customers";

/// Path of the customer collection.
pub const CUSTOMERS_PATH: &str = "/customers";

/// `{base}/customers`
pub fn customers_href(base: &str) -> String {
    format!("{base}{CUSTOMERS_PATH}")
}

/// `{base}/customers/{id}`, also used as the `Location` of created customers.
pub fn customer_href(base: &str, id: i64) -> String {
    format!("{base}{CUSTOMERS_PATH}/{id}")
}

/// Wraps a customer with a `self` link and a link to the collection.
pub fn customer_resource(customer: Customer, base: &str) -> CustomerResource {
    let links = vec![
        Link::new(REL_SELF, customer_href(base, customer.id)),
        Link::new(REL_CUSTOMERS, customers_href(base)),
    ];

    CustomerResource {
        id: customer.id,
        first_name: customer.first_name,
        sur_name: customer.sur_name,
        links,
    }
}

/// Decorates every customer and wraps them in an envelope with a `self` link.
///
/// Order is preserved.
pub fn customer_collection(customers: Vec<Customer>, base: &str) -> CustomerCollection {
    CustomerCollection {
        links: vec![Link::new(REL_SELF, customers_href(base))],
        content: customers
            .into_iter()
            .map(|customer| customer_resource(customer, base))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_resource_relative_links() {
        let resource = customer_resource(Customer::new(1, "John", "Joe"), "");

        assert_eq!(resource.id, 1);
        assert_eq!(resource.first_name, "John");
        assert_eq!(resource.sur_name, "Joe");
        assert_eq!(
            resource.links,
            vec![
                Link::new("self", "/customers/1"),
                Link::new("customers", "/customers"),
            ]
        );
    }

    #[test]
    fn test_customer_resource_absolute_links() {
        let resource = customer_resource(Customer::new(7, "Ryan", "Dan"), "http://localhost");

        assert_eq!(resource.links[0].href, "http://localhost/customers/7");
        assert_eq!(resource.links[1].href, "http://localhost/customers");
    }

    #[test]
    fn test_customer_collection() {
        let collection = customer_collection(
            vec![
                Customer::new(1, "John", "Joe"),
                Customer::new(2, "Ryan", "Dan"),
            ],
            "",
        );

        assert_eq!(collection.links, vec![Link::new("self", "/customers")]);
        assert_eq!(collection.content.len(), 2);
        assert_eq!(collection.content[0].links[0].href, "/customers/1");
        assert_eq!(collection.content[1].links[0].href, "/customers/2");
    }

    #[test]
    fn test_empty_collection_keeps_self_link() {
        let collection = customer_collection(Vec::new(), "");

        assert!(collection.content.is_empty());
        assert_eq!(collection.links.len(), 1);
    }

    #[test]
    fn test_wire_format() {
        let resource = customer_resource(Customer::new(1, "John", "Joe"), "");
        let json = serde_json::to_value(&resource).unwrap();

        assert_eq!(json["firstName"], "John");
        assert_eq!(json["surName"], "Joe");
        assert_eq!(json["links"][0]["rel"], "self");
        assert!(json.get("first_name").is_none());
    }
}
