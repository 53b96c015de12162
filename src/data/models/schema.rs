// Mirrors the tables created by `data::bootstrap`.

diesel::table! {
    categories (id) {
        id -> Integer,
        #[max_length = 50]
        name -> Varchar,
    }
}

diesel::table! {
    orders (id) {
        id -> Integer,
        user_id -> Integer,
        product_id -> Integer,
        quantity -> Integer,
        total_price -> Decimal,
        #[max_length = 20]
        status -> Varchar,
    }
}

diesel::table! {
    payments (id) {
        id -> Integer,
        order_id -> Integer,
        #[max_length = 20]
        payment_type -> Varchar,
        confirmed -> Bool,
    }
}

diesel::table! {
    products (id) {
        id -> Integer,
        #[max_length = 20]
        code -> Varchar,
        #[max_length = 50]
        brand -> Varchar,
        #[max_length = 100]
        name -> Varchar,
        price -> Decimal,
        stock -> Integer,
        category_id -> Integer,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        #[max_length = 80]
        username -> Varchar,
        #[max_length = 255]
        password -> Varchar,
        #[max_length = 20]
        role -> Varchar,
    }
}

diesel::joinable!(orders -> products (product_id));
diesel::joinable!(orders -> users (user_id));
diesel::joinable!(payments -> orders (order_id));
diesel::joinable!(products -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(categories, orders, payments, products, users,);
