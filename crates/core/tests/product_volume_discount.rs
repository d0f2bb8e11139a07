//! Integration tests for the "every Nth line" product volume function.

use serde_json::json;
use testresult::TestResult;

use tally::{
    cart::{Cart, CartLine, Input, Merchandise},
    discounts::{ApplicationStrategy, DiscountTarget},
    functions::{DiscountFunction, ProductVolumeDiscount},
    output,
};

fn variants(count: usize) -> Vec<CartLine> {
    (1..=count)
        .map(|n| CartLine::product_variant(format!("gid://shopify/ProductVariant/{n}")))
        .collect()
}

fn configuration(quantity: usize, percentage: u32) -> String {
    json!({ "quantity": quantity, "percentage": percentage }).to_string()
}

#[test]
fn every_second_of_five_lines() -> TestResult {
    let input = Input::new(Some(configuration(2, 10)), Cart::with_lines(variants(5)));

    let decision = ProductVolumeDiscount::run(&input);

    assert_eq!(
        output::to_value(&decision)?,
        json!({
            "discountApplicationStrategy": "MAXIMUM",
            "discounts": [{
                "value": { "percentage": { "value": "10" } },
                "targets": [
                    { "productVariant": { "id": "gid://shopify/ProductVariant/2" } },
                    { "productVariant": { "id": "gid://shopify/ProductVariant/4" } }
                ]
            }]
        })
    );

    Ok(())
}

#[test]
fn selects_floor_k_over_n_targets_at_multiples_of_n() {
    for quantity in 1..=5 {
        for k in 0..=12 {
            let input = Input::new(Some(configuration(quantity, 25)), Cart::with_lines(variants(k)));

            let decision = ProductVolumeDiscount::run(&input);

            assert_eq!(decision.strategy(), ApplicationStrategy::Maximum);

            let expected: Vec<DiscountTarget> = (1..=k)
                .filter(|position| position % quantity == 0)
                .map(|position| {
                    DiscountTarget::product_variant(format!(
                        "gid://shopify/ProductVariant/{position}"
                    ))
                })
                .collect();

            assert_eq!(expected.len(), k / quantity);

            if k < quantity {
                assert_eq!(decision, ProductVolumeDiscount::empty(), "k = {k}, n = {quantity}");
            } else {
                let [discount] = decision.discounts() else {
                    unreachable!("expected one discount for k = {k}, n = {quantity}");
                };

                assert_eq!(discount.targets(), expected.as_slice());
            }
        }
    }
}

#[test]
fn fewer_lines_than_quantity_is_empty() -> TestResult {
    let input = Input::new(Some(configuration(4, 10)), Cart::with_lines(variants(3)));

    assert_eq!(
        output::to_value(&ProductVolumeDiscount::run(&input))?,
        json!({ "discountApplicationStrategy": "MAXIMUM", "discounts": [] })
    );

    Ok(())
}

#[test]
fn zero_or_missing_fields_are_empty() {
    for raw in [
        r#"{"quantity": 0, "percentage": 10}"#,
        r#"{"quantity": 2, "percentage": 0}"#,
        r#"{"quantity": 2}"#,
        r#"{"percentage": 10}"#,
        r#"{"quantity": -1, "percentage": 10}"#,
        r#"{"quantity": 1.5, "percentage": 10}"#,
        "{}",
    ] {
        let input = Input::new(Some(raw), Cart::with_lines(variants(6)));

        assert_eq!(
            ProductVolumeDiscount::run(&input),
            ProductVolumeDiscount::empty(),
            "{raw} should not discount"
        );
    }
}

#[test]
fn non_variant_lines_are_never_targets() -> TestResult {
    let input: Input = serde_json::from_value(json!({
        "discountNode": { "metafield": { "value": "{\"quantity\": 1, \"percentage\": 5}" } },
        "cart": {
            "lines": [
                { "merchandise": { "__typename": "CustomProduct" } },
                { "merchandise": { "__typename": "ProductVariant", "id": "gid://shopify/ProductVariant/8" } },
                { "merchandise": { "__typename": "CustomProduct", "title": "Gift wrap" } }
            ]
        }
    }))?;

    let decision = ProductVolumeDiscount::run(&input);

    let [discount] = decision.discounts() else {
        unreachable!("expected one discount");
    };

    assert_eq!(
        discount.targets(),
        &[DiscountTarget::product_variant("gid://shopify/ProductVariant/8")]
    );

    Ok(())
}

#[test]
fn other_merchandise_is_skipped_when_counting() {
    let lines = vec![
        CartLine::product_variant("a"),
        CartLine::new(Merchandise::Other, 1),
        CartLine::product_variant("b"),
        CartLine::product_variant("c"),
    ];

    let input = Input::new(Some(configuration(3, 10)), Cart::with_lines(lines));

    let decision = ProductVolumeDiscount::run(&input);

    let [discount] = decision.discounts() else {
        unreachable!("expected one discount");
    };

    assert_eq!(discount.targets(), &[DiscountTarget::product_variant("c")]);
}
