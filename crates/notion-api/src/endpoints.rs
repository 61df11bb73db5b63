//! Endpoint table: one descriptor per API operation.

use notionkit_client::{Endpoint, RequestMethod};

const PAGINATION: &[&str] = &["start_cursor", "page_size"];

pub mod databases {
    use super::*;

    pub const RETRIEVE: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "databases/{database_id}",
        query_params: &[],
        body_params: &[],
    };

    pub const QUERY: Endpoint = Endpoint {
        method: RequestMethod::Post,
        path: "databases/{database_id}/query",
        query_params: &["filter_properties"],
        body_params: &[
            "sorts",
            "filter",
            "start_cursor",
            "page_size",
            "archived",
            "in_trash",
        ],
    };

    pub const LIST: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "databases",
        query_params: PAGINATION,
        body_params: &[],
    };

    pub const CREATE: Endpoint = Endpoint {
        method: RequestMethod::Post,
        path: "databases",
        query_params: &[],
        body_params: &[
            "parent",
            "properties",
            "icon",
            "cover",
            "title",
            "description",
            "is_inline",
        ],
    };

    pub const UPDATE: Endpoint = Endpoint {
        method: RequestMethod::Patch,
        path: "databases/{database_id}",
        query_params: &[],
        body_params: &[
            "title",
            "description",
            "icon",
            "cover",
            "properties",
            "is_inline",
            "archived",
            "in_trash",
        ],
    };
}

pub mod pages {
    use super::*;

    pub const CREATE: Endpoint = Endpoint {
        method: RequestMethod::Post,
        path: "pages",
        query_params: &[],
        body_params: &["parent", "properties", "icon", "cover", "content", "children"],
    };

    pub const RETRIEVE: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "pages/{page_id}",
        query_params: &["filter_properties"],
        body_params: &[],
    };

    pub const UPDATE: Endpoint = Endpoint {
        method: RequestMethod::Patch,
        path: "pages/{page_id}",
        query_params: &[],
        body_params: &["properties", "icon", "cover", "archived", "in_trash"],
    };

    pub const RETRIEVE_PROPERTY: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "pages/{page_id}/properties/{property_id}",
        query_params: PAGINATION,
        body_params: &[],
    };
}

pub mod blocks {
    use super::*;

    pub const RETRIEVE: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "blocks/{block_id}",
        query_params: &[],
        body_params: &[],
    };

    pub const UPDATE: Endpoint = Endpoint {
        method: RequestMethod::Patch,
        path: "blocks/{block_id}",
        query_params: &[],
        body_params: &[
            "type",
            "embed",
            "bookmark",
            "image",
            "video",
            "pdf",
            "file",
            "audio",
            "code",
            "equation",
            "divider",
            "breadcrumb",
            "table_of_contents",
            "link_to_page",
            "table_row",
            "heading_1",
            "heading_2",
            "heading_3",
            "paragraph",
            "bulleted_list_item",
            "numbered_list_item",
            "quote",
            "to_do",
            "toggle",
            "template",
            "callout",
            "synced_block",
            "table",
            "column",
            "archived",
            "in_trash",
        ],
    };

    pub const DELETE: Endpoint = Endpoint {
        method: RequestMethod::Delete,
        path: "blocks/{block_id}",
        query_params: &[],
        body_params: &[],
    };

    pub const APPEND_CHILDREN: Endpoint = Endpoint {
        method: RequestMethod::Patch,
        path: "blocks/{block_id}/children",
        query_params: &[],
        body_params: &["children", "after"],
    };

    pub const LIST_CHILDREN: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "blocks/{block_id}/children",
        query_params: PAGINATION,
        body_params: &[],
    };
}

pub mod users {
    use super::*;

    pub const RETRIEVE: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "users/{user_id}",
        query_params: &[],
        body_params: &[],
    };

    pub const LIST: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "users",
        query_params: PAGINATION,
        body_params: &[],
    };

    pub const ME: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "users/me",
        query_params: &[],
        body_params: &[],
    };
}

pub mod comments {
    use super::*;

    pub const CREATE: Endpoint = Endpoint {
        method: RequestMethod::Post,
        path: "comments",
        query_params: &[],
        body_params: &["parent", "discussion_id", "rich_text"],
    };

    pub const LIST: Endpoint = Endpoint {
        method: RequestMethod::Get,
        path: "comments",
        query_params: &["block_id", "start_cursor", "page_size"],
        body_params: &[],
    };
}

pub const SEARCH: Endpoint = Endpoint {
    method: RequestMethod::Post,
    path: "search",
    query_params: &[],
    body_params: &["query", "sort", "filter", "start_cursor", "page_size"],
};

/// Every operation, keyed by its dotted name.
pub const ALL: &[(&str, Endpoint)] = &[
    ("databases.retrieve", databases::RETRIEVE),
    ("databases.query", databases::QUERY),
    ("databases.list", databases::LIST),
    ("databases.create", databases::CREATE),
    ("databases.update", databases::UPDATE),
    ("pages.create", pages::CREATE),
    ("pages.retrieve", pages::RETRIEVE),
    ("pages.update", pages::UPDATE),
    ("pages.properties.retrieve", pages::RETRIEVE_PROPERTY),
    ("blocks.retrieve", blocks::RETRIEVE),
    ("blocks.update", blocks::UPDATE),
    ("blocks.delete", blocks::DELETE),
    ("blocks.children.append", blocks::APPEND_CHILDREN),
    ("blocks.children.list", blocks::LIST_CHILDREN),
    ("users.retrieve", users::RETRIEVE),
    ("users.list", users::LIST),
    ("users.me", users::ME),
    ("comments.create", comments::CREATE),
    ("comments.list", comments::LIST),
    ("search", SEARCH),
];
