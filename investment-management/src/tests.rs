#![cfg(test)]

mod tests {
    extern crate std;

    use crate::{InvestmentManagement, InvestmentManagementClient};
    use project_verification::{ProjectVerificationContract, ProjectVerificationContractClient};
    use shared::errors::Error;
    use soroban_sdk::{
        testutils::{Address as _, Ledger},
        Address, Env, String,
    };
    use std::vec::Vec as StdVec;

    /// Registry with one registered project plus an initialized investment
    /// ledger pointing at it
    fn create_test_env<'a>() -> (
        Env,
        InvestmentManagementClient<'a>,
        ProjectVerificationContractClient<'a>,
        u64,
    ) {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_sequence_number(123);

        let admin = Address::generate(&env);

        let registry_id = env.register_contract(None, ProjectVerificationContract);
        let registry = ProjectVerificationContractClient::new(&env, &registry_id);
        registry.initialize(&admin);
        let project_id = register_project(&env, &registry, "The Blockchain Movie");

        let client = create_client(&env);
        client.initialize(&admin, &registry_id);

        (env, client, registry, project_id)
    }

    fn create_client<'a>(env: &Env) -> InvestmentManagementClient<'a> {
        InvestmentManagementClient::new(env, &env.register_contract(None, InvestmentManagement))
    }

    fn register_project(env: &Env, registry: &ProjectVerificationContractClient, title: &str) -> u64 {
        registry.register_project(
            &Address::generate(env),
            &String::from_str(env, title),
            &String::from_str(env, "John Director"),
            &1_000_000,
            &20240101,
            &20241231,
        )
    }

    #[test]
    fn test_single_investor_owns_everything() {
        let (env, client, _, project_id) = create_test_env();
        let investor = Address::generate(&env);

        let bps = client.invest(&project_id, &investor, &100_000);
        assert_eq!(bps, 10_000);

        let investment = client.get_investment(&project_id, &investor).unwrap();
        assert_eq!(investment.amount, 100_000);
        assert_eq!(investment.ownership_bps, 10_000);
        assert_eq!(investment.recorded_at, 123);
    }

    #[test]
    fn test_second_investor_gets_half_and_first_is_stale() {
        let (env, client, _, project_id) = create_test_env();
        let investor1 = Address::generate(&env);
        let investor2 = Address::generate(&env);

        client.invest(&project_id, &investor1, &100_000);
        let bps = client.invest(&project_id, &investor2, &100_000);
        assert_eq!(bps, 5_000);

        // investor1 has not contributed since the pool doubled
        let first = client.get_investment(&project_id, &investor1).unwrap();
        assert_eq!(first.ownership_bps, 10_000);
        assert_eq!(first.amount, 100_000);
    }

    #[test]
    fn test_stale_share_refreshes_on_next_contribution() {
        let (env, client, _, project_id) = create_test_env();
        let investor1 = Address::generate(&env);
        let investor2 = Address::generate(&env);

        client.invest(&project_id, &investor1, &100_000);
        // 200k of 300k
        assert_eq!(client.invest(&project_id, &investor2, &200_000), 6_666);

        // 150k of 350k
        let bps = client.invest(&project_id, &investor1, &50_000);
        assert_eq!(bps, 4_285);
        assert_eq!(
            client.get_investment(&project_id, &investor1).unwrap().ownership_bps,
            4_285
        );

        // investor2 keeps the share from their own contribution
        let second = client.get_investment(&project_id, &investor2).unwrap();
        assert_eq!(second.ownership_bps, 6_666);
        assert_eq!(second.amount, 200_000);
    }

    #[test]
    fn test_track_total_investment() {
        let (env, client, _, project_id) = create_test_env();
        let investor1 = Address::generate(&env);
        let investor2 = Address::generate(&env);

        client.invest(&project_id, &investor1, &100_000);
        client.invest(&project_id, &investor2, &150_000);

        let aggregate = client.get_project_investment(&project_id).unwrap();
        assert_eq!(aggregate.total_investment, 250_000);
        assert_eq!(aggregate.investor_count, 2);
    }

    #[test]
    fn test_repeat_investor_counted_once() {
        let (env, client, _, project_id) = create_test_env();
        let investor = Address::generate(&env);

        client.invest(&project_id, &investor, &10);
        env.ledger().set_sequence_number(200);
        let bps = client.invest(&project_id, &investor, &30);
        assert_eq!(bps, 10_000);

        let aggregate = client.get_project_investment(&project_id).unwrap();
        assert_eq!(aggregate.total_investment, 40);
        assert_eq!(aggregate.investor_count, 1);

        let investment = client.get_investment(&project_id, &investor).unwrap();
        assert_eq!(investment.amount, 40);
        assert_eq!(investment.recorded_at, 200);
    }

    #[test]
    fn test_ownership_never_exceeds_full_share() {
        let (env, client, _, project_id) = create_test_env();
        let amounts: [i128; 6] = [7, 13, 1_000, 3, 999_999, 42];
        let mut investors = StdVec::new();

        for amount in amounts.iter() {
            let investor = Address::generate(&env);
            let bps = client.invest(&project_id, &investor, amount);
            assert!(bps <= 10_000);
            investors.push(investor);
        }

        for investor in investors.iter() {
            let stored = client.get_investment(&project_id, investor).unwrap();
            assert!(stored.ownership_bps <= 10_000);
        }

        // Against the current total the shares never add up to more than 100%
        let total = client.get_project_investment(&project_id).unwrap().total_investment;
        assert_eq!(total, amounts.iter().sum::<i128>());
        let current_sum: i128 = amounts.iter().map(|amount| amount * 10_000 / total).sum();
        assert!(current_sum <= 10_000);
    }

    #[test]
    fn test_truncation_drift_is_tolerated() {
        let (env, client, _, project_id) = create_test_env();
        let investors: StdVec<Address> = (0..3).map(|_| Address::generate(&env)).collect();

        for investor in investors.iter() {
            client.invest(&project_id, investor, &1);
        }
        for investor in investors.iter() {
            client.invest(&project_id, investor, &1);
        }

        // Each share reflects the total at that investor's own contribution:
        // 2 of 4, 2 of 5, 2 of 6
        let stored: StdVec<u32> = investors
            .iter()
            .map(|investor| client.get_investment(&project_id, investor).unwrap().ownership_bps)
            .collect();
        assert_eq!(stored, [5_000, 4_000, 3_333]);

        // Equal holders at the final total truncate to 9999 bps overall
        let total = client.get_project_investment(&project_id).unwrap().total_investment;
        assert_eq!(total, 6);
        assert_eq!(3 * (2 * 10_000 / total), 9_999);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let (env, client, _, project_id) = create_test_env();
        let investor = Address::generate(&env);

        let result = client.try_invest(&project_id, &investor, &0);
        assert_eq!(result, Err(Ok(Error::InvalidAmount)));

        let result = client.try_invest(&project_id, &investor, &-100);
        assert_eq!(result, Err(Ok(Error::InvalidAmount)));

        assert_eq!(client.get_investment(&project_id, &investor), None);
        assert_eq!(client.get_project_investment(&project_id), None);
    }

    #[test]
    fn test_unknown_project_rejected() {
        let (env, client, _, _) = create_test_env();
        let investor = Address::generate(&env);

        let result = client.try_invest(&999, &investor, &100);
        assert_eq!(result, Err(Ok(Error::ProjectNotFound)));
        assert_eq!(client.get_project_investment(&999), None);
    }

    #[test]
    fn test_unverified_project_accepts_investment() {
        let (env, client, registry, project_id) = create_test_env();
        assert!(!registry.is_project_verified(&project_id));

        let bps = client.invest(&project_id, &Address::generate(&env), &1);
        assert_eq!(bps, 10_000);
    }

    #[test]
    fn test_large_sole_investment_owns_everything() {
        let (env, client, _, project_id) = create_test_env();
        let whale = Address::generate(&env);

        let bps = client.invest(&project_id, &whale, &(i128::MAX / 10_000 + 1));
        assert_eq!(bps, 10_000);
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let (env, client, _, project_id) = create_test_env();
        let whale = Address::generate(&env);
        let other = Address::generate(&env);

        client.invest(&project_id, &whale, &(i128::MAX / 10_000));
        let result = client.try_invest(&project_id, &other, &i128::MAX);
        assert_eq!(result, Err(Ok(Error::InvalidAmount)));

        let aggregate = client.get_project_investment(&project_id).unwrap();
        assert_eq!(aggregate.total_investment, i128::MAX / 10_000);
        assert_eq!(aggregate.investor_count, 1);
    }

    #[test]
    fn test_projects_are_isolated() {
        let (env, client, registry, project_id) = create_test_env();
        let sequel = register_project(&env, &registry, "Sequel");
        let investor = Address::generate(&env);

        client.invest(&project_id, &investor, &100);
        let bps = client.invest(&sequel, &Address::generate(&env), &300);
        assert_eq!(bps, 10_000);

        assert_eq!(client.get_project_investment(&project_id).unwrap().total_investment, 100);
        assert_eq!(client.get_project_investment(&sequel).unwrap().total_investment, 300);
        assert_eq!(client.get_investment(&sequel, &investor), None);
    }

    #[test]
    fn test_invest_before_initialize() {
        let env = Env::default();
        env.mock_all_auths();
        let client = create_client(&env);

        let result = client.try_invest(&1, &Address::generate(&env), &100);
        assert_eq!(result, Err(Ok(Error::NotInitialized)));
    }

    #[test]
    fn test_invest_requires_investor_auth() {
        let (env, client, _, project_id) = create_test_env();
        let investor = Address::generate(&env);

        env.mock_auths(&[]);
        let result = client.try_invest(&project_id, &investor, &100);
        assert!(result.is_err());
        assert_eq!(client.get_investment(&project_id, &investor), None);
    }
}
