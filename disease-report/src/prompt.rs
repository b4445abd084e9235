/// Build the instruction sent to the text-generation collaborator for one disease.
///
/// The schema template is embedded verbatim; the collaborator is told to
/// respect it and to answer with raw JSON, not markdown. Conformance is not
/// guaranteed, which is why [`crate::parse_report`] validates the reply.
pub fn build_disease_prompt(disease: &str, template: &str) -> String {
    format!(
        "Please provide information on the following aspects for {disease}: \
         1. Key Statistics, 2. Recovery Options, 3. Recommended Medications. \
         Format the response in JSON with keys for 'name', 'statistics', \
         'total_cases' (this always has to be a number), 'recovery_rate' \
         (this always has to be a percentage), 'mortality_rate' (this always \
         has to be a percentage), 'recovery_options' (explain each recovery \
         option in detail), and 'medication' (give some side effect examples \
         and dosages). Also this is a json template that you MUST respect: \
         {template}. Finally the response should be in json format and not in markdown."
    )
}
